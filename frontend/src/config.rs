//! Application configuration.
//!
//! Centralized configuration for the Notecast frontend. Everything here is
//! a compile-time constant; there is no server to negotiate limits with in
//! this milestone.

/// Application name, shown in the page title and hero.
pub const APP_NAME: &str = "Notecast";

/// Maximum number of files that can be staged at once.
///
/// Checked against the raw size of an incoming batch plus the files
/// already staged; a batch that does not fit is refused whole.
pub const MAX_STAGED_FILES: usize = 20;

/// MIME types admitted by staging validation (exact match).
pub const ACCEPTED_MIME_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/png"];

/// `accept` attribute for the hidden file input.
///
/// A picker hint only; [`ACCEPTED_MIME_TYPES`] is the authoritative filter.
pub const FILE_ACCEPT_HINT: &str = "image/*,application/pdf";

/// How long a toast stays on screen before auto-dismissing, in milliseconds.
pub const TOAST_DISMISS_MS: u32 = 4_000;
