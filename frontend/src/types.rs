//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Toast Types** - transient notifications
//! - **Tile Types** - staged-file grid view-model

// =============================================================================
// Toast Types
// =============================================================================

/// Toast severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    /// Something went wrong; prior state is unchanged.
    Error,
    /// Informational message.
    Info,
}

impl ToastLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Error => "toast-error",
            ToastLevel::Info => "toast-info",
        }
    }
}

/// A single transient notification.
///
/// Pushed by event handlers, auto-dismissed after a delay or dismissed
/// manually; never blocks or alters the staging state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonically increasing id, used as the render key and for dismissal.
    pub id: u32,
    /// Severity level.
    pub level: ToastLevel,
    /// User-facing message.
    pub message: String,
}

// =============================================================================
// Tile Types
// =============================================================================

/// Data needed to render one staged-file tile.
///
/// Projected from the staging list so the view never holds raw file
/// handles; the preview URL stays valid until the entry is removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileInfo {
    /// Staging id of the underlying entry.
    pub id: String,
    /// File name, shown on placeholder tiles.
    pub file_name: String,
    /// Preview URL for image files; `None` renders the PDF placeholder.
    pub preview: Option<String>,
}
