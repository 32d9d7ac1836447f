//! SkillScope - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a resume and rendering the
//! backend's analysis: match and readiness scores against a target role,
//! plus matched and missing skills.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (branding)                                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                               │
//! │  ├── AnalyzeForm (resume upload, target role)                │
//! │  ├── LoadingIndicator (while a request is in flight)         │
//! │  ├── ErrorNotice or ResultsSection                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (AnalysisReport, RoleProfile, etc.)
//! - [`components`] - UI components (Header, AnalyzeForm, Results, etc.)
//! - [`services`] - Backend communication (analysis, role profiles)

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    AnalysisFailure, AnalysisOutcome, AnalysisReport,
    // Roles
    RoleProfile,
    // Errors
    AppError, AppResult,
};

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

    log::info!("🦀 SkillScope - Starting Leptos App");

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
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Submission-scoped state: exactly one of `error`/`analysis` is set
    // once a request completes, and both are cleared when the next starts.
    let (analysis, set_analysis) = create_signal(None::<AnalysisReport>);
    let (error, set_error) = create_signal(None::<String>);
    let (is_analyzing, set_is_analyzing) = create_signal(false);

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <AnalyzeForm
                set_analysis=set_analysis
                set_error=set_error
                is_analyzing=is_analyzing
                set_is_analyzing=set_is_analyzing
            />

            <Show
                when=move || is_analyzing.get()
                fallback=|| view! { }
            >
                <LoadingIndicator/>
            </Show>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <ErrorNotice error=error/>
            </Show>

            <Show
                when=move || analysis.get().is_some()
                fallback=|| view! { }
            >
                <ResultsSection analysis=analysis/>
            </Show>
        </div>

        <Footer/>
    }
}
