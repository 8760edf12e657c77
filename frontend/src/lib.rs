//! FishScan - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for predicting fish diseases from a photo.
//! The image is sent to an external model server, which answers with a
//! label, a confidence score and a suggested treatment.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (species page link, model server status)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadWidget                                                │
//! │  ├── DropZone (when nothing is selected)                    │
//! │  ├── Preview image + spinner / ResultTable / error          │
//! │  └── Clear button                                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (InferenceResult, ServiceStatus, AppError)
//! - [`state`] - Upload widget state machine, browser-free
//! - [`components`] - UI components (Header, UploadWidget, ...)
//! - [`services`] - Browser and HTTP boundary

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
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
    // API
    InferenceResult,
    // Status
    ServiceStatus,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{Phase, WidgetState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Set up logging and mount the application on `<body>`.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 FishScan - Starting Leptos App (model server: {})", api_url());

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
    let (status, set_status) = create_signal(ServiceStatus::Unknown);

    // Probe the model server ONCE at startup
    spawn_local(async move {
        let probed = check_health(api_url()).await;
        log::info!("📡 Model server: {}", probed.label());
        set_status.set(probed);
    });

    view! {
        <Header status=status/>

        <div class="main-container">
            <UploadWidget/>
        </div>
    }
}
