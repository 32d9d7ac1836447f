//! Analysis results panel: score bars and skill tags.

use leptos::*;

use crate::types::AnalysisReport;

/// Inline style for a progress fill.
///
/// The width is clamped to the displayable range; the label next to it
/// still shows the raw value.
fn fill_style(value: f64) -> String {
    format!("width:{}%", value.clamp(0.0, 100.0))
}

/// Numeric label shown inside a progress bar.
fn score_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{}%", value)
    }
}

/// Single-line failure display, for backend-rejected and failed requests.
#[component]
pub fn ErrorNotice(error: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <div class="error-message" id="errorSection">
            {move || error.get().unwrap_or_default()}
        </div>
    }
}

#[component]
pub fn ResultsSection(analysis: ReadSignal<Option<AnalysisReport>>) -> impl IntoView {
    let match_pct = move || {
        analysis
            .get()
            .map(|report| report.match_percentage)
            .unwrap_or_default()
    };
    let readiness = move || {
        analysis
            .get()
            .map(|report| report.readiness_score)
            .unwrap_or_default()
    };
    let matched = move || {
        analysis
            .get()
            .map(|report| report.matched_skills)
            .unwrap_or_default()
    };
    let missing = move || {
        analysis
            .get()
            .map(|report| report.missing_skills)
            .unwrap_or_default()
    };

    view! {
        <div class="result-card" id="resultSection">
            <h2>"Match Score"</h2>
            <div class="progress-bar">
                <div class="progress-fill" style=move || fill_style(match_pct())>
                    {move || score_label(match_pct())}
                </div>
            </div>

            <h2>"Readiness Score"</h2>
            <div class="progress-bar">
                <div class="progress-fill" style=move || fill_style(readiness())>
                    {move || score_label(readiness())}
                </div>
            </div>

            <h3>"Matched Skills"</h3>
            <div class="skill-list">
                <For
                    each=move || matched().into_iter().enumerate()
                    key=|(idx, skill)| (*idx, skill.clone())
                    children=move |(_, skill)| {
                        view! { <span class="skill-tag">{skill}</span> }
                    }
                />
            </div>

            <h3>"Missing Skills"</h3>
            <div class="skill-list">
                <For
                    each=move || missing().into_iter().enumerate()
                    key=|(idx, skill)| (*idx, skill.clone())
                    children=move |(_, skill)| {
                        view! { <span class="skill-tag missing">{skill}</span> }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_width_tracks_the_value() {
        assert_eq!(fill_style(72.0), "width:72%");
        assert_eq!(fill_style(55.5), "width:55.5%");
    }

    #[test]
    fn fill_width_is_clamped_to_the_bar() {
        assert_eq!(fill_style(137.0), "width:100%");
        assert_eq!(fill_style(-5.0), "width:0%");
    }

    #[test]
    fn label_shows_the_raw_value() {
        assert_eq!(score_label(72.0), "72%");
        assert_eq!(score_label(55.5), "55.5%");
        // Out-of-range values are shown as received, only the bar is clamped.
        assert_eq!(score_label(137.0), "137%");
    }
}
