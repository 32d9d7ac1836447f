//! Loading indicator shown while an analysis is in flight.

use leptos::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading" id="loading">
            <div class="spinner"></div>
            <p>"Analyzing resume…"</p>
        </div>
    }
}
