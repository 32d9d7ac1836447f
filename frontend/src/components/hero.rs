//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Resume Fit Analysis"</h1>
            <p class="subtitle">
                "Upload a resume and pick a target role. "
                "The analyzer scores the match, estimates readiness, "
                "and lists matched and missing skills."
            </p>
        </div>
    }
}
