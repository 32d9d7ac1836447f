use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"SKILLSCOPE"</a>
                <span class="badge">"Resume Analyzer"</span>
            </div>
        </header>
    }
}
