//! Notecast - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for staging notes, PDFs, and images (plus an
//! optional YouTube link) ahead of AI podcast generation. Files never
//! leave the browser in this milestone; the page validates, previews, and
//! tracks them until submission is wired up.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  HomePage (owns StagingList + toast signals)                 │
//! │  ├── Hero (title, tagline)                                  │
//! │  ├── DropZone (drag & drop, file picker)                    │
//! │  ├── StagedGrid (previews, count, per-tile removal)         │
//! │  ├── YoutubeLinkField                                       │
//! │  └── CreatePodcastButton (stub)                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastStack (transient errors)                               │
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Centralized constants (capacity, accepted types, delays)
//! - [`types`] - Common types (Toast, TileInfo)
//! - [`staging`] - Upload staging state machine
//! - [`components`] - UI components (DropZone, StagedGrid, etc.)
//! - [`services`] - Browser resources (object-URL preview store)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod staging;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{TileInfo, Toast, ToastLevel};

// Staging
pub use staging::{PendingUpload, PreviewStore, StageError, StagingList, UploadFile};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Notecast - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    // Page-level state: the staging list (with its preview store) and the
    // toast overlay. Disposing the page drops the list, which revokes any
    // outstanding preview references.
    let (staging, set_staging) = create_signal(WebStagingList::new(ObjectUrlStore));
    let (toasts, set_toasts) = create_signal(Vec::<Toast>::new());

    view! {
        <div class="container">
            <Hero/>

            <DropZone set_staging=set_staging set_toasts=set_toasts/>

            // Only rendered while files are staged
            <StagedGrid staging=staging set_staging=set_staging/>

            <YoutubeLinkField/>

            <CreatePodcastButton/>
        </div>

        <ToastStack toasts=toasts set_toasts=set_toasts/>

        <Footer/>
    }
}
