//! Image Classifier - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads one image to the classification
//! server and displays the returned classes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadWidget                                           │
//! │      ├── file input, error text, preview                    │
//! │      └── ResultsTable (image name, classes)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoint, accepted extensions, user-facing messages
//! - [`types`] - Common types (UploadState, ClassifyResponse, AppError)
//! - [`validation`] - File name checks
//! - [`state`] - Upload widget state machine
//! - [`components`] - UI components (Header, UploadWidget, ...)
//! - [`services`] - Server communication (upload)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod validation;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // State
    UploadState,
    // API
    ClassifyResponse, ResultCell, ResultRow, UploadOutcome,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{Completion, Effect, Selection, WidgetState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Mount the application on the page body.
///
/// Called by the trunk binary entry point.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Image Classifier - Starting Leptos App");

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
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <UploadWidget/>
        </div>

        <Footer/>
    }
}
