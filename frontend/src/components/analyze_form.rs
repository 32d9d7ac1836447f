//! Resume upload form and its submission handler.
//!
//! Owns the submit flow: build the multipart payload from the form,
//! flip the loading state, await the backend, and hand the outcome to
//! the signals the results components render from.

use leptos::*;
use web_sys::{Event, FormData, HtmlFormElement, HtmlInputElement, SubmitEvent};

use crate::config::API_BASE_URL;
use crate::services::{analyze_resume, fetch_role_profiles};
use crate::types::{AnalysisOutcome, AnalysisReport, RoleProfile};

#[component]
pub fn AnalyzeForm(
    set_analysis: WriteSignal<Option<AnalysisReport>>,
    set_error: WriteSignal<Option<String>>,
    is_analyzing: ReadSignal<bool>,
    set_is_analyzing: WriteSignal<bool>,
) -> impl IntoView {
    let (roles, set_roles) = create_signal(Vec::<RoleProfile>::new());
    let (file_name, set_file_name) = create_signal(None::<String>);

    // Known role profiles feed the target-role suggestion list. Losing them
    // only degrades the input to free text.
    spawn_local(async move {
        match fetch_role_profiles(API_BASE_URL).await {
            Ok(profiles) => set_roles.set(profiles),
            Err(e) => log::warn!("Could not load role profiles: {}", e),
        }
    });

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let selected = input.files().and_then(|files| files.get(0));
        set_file_name.set(selected.map(|file| file.name()));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // One request at a time. The submit button is disabled while a
        // request is in flight, but a queued Enter keypress still lands here.
        if is_analyzing.get() {
            return;
        }

        // The payload snapshots the fields at the moment of submission.
        let form: HtmlFormElement = event_target(&ev);
        let form_data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Failed to read form fields: {:?}", e);
                set_error.set(Some("Could not read the form fields.".to_string()));
                return;
            }
        };

        set_is_analyzing.set(true);
        set_error.set(None);
        set_analysis.set(None);

        spawn_local(async move {
            let started = js_sys::Date::now();

            match analyze_resume(form_data, API_BASE_URL).await {
                Ok(AnalysisOutcome::Report(report)) => {
                    let elapsed = (js_sys::Date::now() - started) / 1000.0;
                    log::info!("✅ Analysis finished in {:.1}s", elapsed);
                    set_analysis.set(Some(report));
                }
                Ok(AnalysisOutcome::Failure(failure)) => {
                    match &failure.details {
                        Some(details) => {
                            log::error!("❌ Analysis rejected: {} ({})", failure.error, details)
                        }
                        None => log::error!("❌ Analysis rejected: {}", failure.error),
                    }
                    set_error.set(Some(failure.error));
                }
                Err(e) => {
                    log::error!("❌ Analysis request failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }

            // Every path ends here, so the loading indicator never sticks.
            set_is_analyzing.set(false);
        });
    };

    view! {
        <form class="analyze-form" id="resumeForm" on:submit=on_submit>
            <div class="form-field">
                <label for="resumeFile">"Resume (PDF)"</label>
                <input
                    type="file"
                    id="resumeFile"
                    name="resume_file"
                    accept=".pdf"
                    required
                    on:change=on_file_change
                />
                <Show
                    when=move || file_name.get().is_some()
                    fallback=|| view! { }
                >
                    <span class="file-name">
                        {move || file_name.get().unwrap_or_default()}
                    </span>
                </Show>
            </div>

            <div class="form-field">
                <label for="targetRole">"Target role"</label>
                <input
                    type="text"
                    id="targetRole"
                    name="target_role"
                    list="roleOptions"
                    placeholder="e.g. Data Engineer"
                    maxlength="255"
                    required
                />
                <datalist id="roleOptions">
                    <For
                        each=move || roles.get().into_iter().enumerate()
                        key=|(idx, profile)| (*idx, profile.role.clone())
                        children=move |(_, profile)| {
                            view! { <option value=profile.role/> }
                        }
                    />
                </datalist>
            </div>

            <button
                type="submit"
                class="analyze-button"
                prop:disabled=move || is_analyzing.get()
            >
                {move || if is_analyzing.get() {
                    "Analyzing…"
                } else {
                    "Analyze Resume"
                }}
            </button>
        </form>
    }
}
