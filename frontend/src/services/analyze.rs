//! HTTP service submitting a resume for analysis.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, FormData};

use crate::config::{ANALYZE_PATH, REQUEST_TIMEOUT_MS};
use crate::types::{AnalysisOutcome, AppError, AppResult};

/// POST the form's fields to the analysis endpoint and decode the outcome.
///
/// The request carries an abort signal wired to a timer, so it cannot stay
/// in flight past [`REQUEST_TIMEOUT_MS`]. The timer is cancelled as soon as
/// a response arrives.
pub async fn analyze_resume(form_data: FormData, base_url: &str) -> AppResult<AnalysisOutcome> {
    let controller =
        AbortController::new().map_err(|e| AppError::Request(format!("{:?}", e)))?;
    let signal = controller.signal();

    let timed_out = Rc::new(Cell::new(false));
    let deadline = {
        let timed_out = timed_out.clone();
        Timeout::new(REQUEST_TIMEOUT_MS, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let url = format!("{}{}", base_url, ANALYZE_PATH);
    let request = Request::post(&url)
        .abort_signal(Some(&signal))
        .body(form_data)
        .map_err(|e| AppError::Request(e.to_string()))?;

    let sent = request.send().await;
    drop(deadline);

    let response = match sent {
        Ok(response) => response,
        Err(_) if timed_out.get() => return Err(AppError::Timeout),
        Err(e) => return Err(AppError::Network(e.to_string())),
    };

    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    decode_outcome(status, ok, &body)
}

/// Interpret a response body.
///
/// The backend ships JSON error records with non-2xx statuses (400 on a bad
/// upload, 429 on rate limiting, 500 on processing failures), so a decodable
/// body wins over the status code. Only a body that decodes as neither
/// variant is a transport-level failure.
fn decode_outcome(status: u16, ok: bool, body: &str) -> AppResult<AnalysisOutcome> {
    match serde_json::from_str::<AnalysisOutcome>(body) {
        Ok(outcome) => Ok(outcome),
        Err(e) if ok => Err(AppError::Decode(e.to_string())),
        Err(_) => Err(AppError::Server(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnalysisFailure, AnalysisReport};

    #[test]
    fn report_decodes_and_ignores_extra_fields() {
        // Success body as the backend actually sends it, with the fields
        // this frontend does not render.
        let json = r#"{
            "id": 42,
            "target_role": "Data Engineer",
            "match_percentage": 72,
            "readiness_score": 55.5,
            "matched_skills": ["Python", "SQL"],
            "missing_skills": ["Docker"],
            "extracted_skills": ["Python", "SQL", "Git"],
            "roadmap": {"phase_1": ["Learn Docker basics"]},
            "confidence_score": 0.82,
            "live_jobs": []
        }"#;

        let outcome = decode_outcome(201, true, json).unwrap();
        let AnalysisOutcome::Report(report) = outcome else {
            panic!("expected a report");
        };
        assert_eq!(report.match_percentage, 72.0);
        assert_eq!(report.readiness_score, 55.5);
        assert_eq!(report.matched_skills, vec!["Python", "SQL"]);
        assert_eq!(report.missing_skills, vec!["Docker"]);
    }

    #[test]
    fn error_body_decodes_as_failure() {
        let json = r#"{"error": "No resume text could be extracted."}"#;

        let outcome = decode_outcome(400, false, json).unwrap();
        assert_eq!(
            outcome,
            AnalysisOutcome::Failure(AnalysisFailure {
                error: "No resume text could be extracted.".to_string(),
                details: None,
            })
        );
    }

    #[test]
    fn failure_details_are_captured() {
        let json = r#"{"error": "Processing failed", "details": "model unavailable"}"#;

        let outcome = decode_outcome(500, false, json).unwrap();
        let AnalysisOutcome::Failure(failure) = outcome else {
            panic!("expected a failure");
        };
        assert_eq!(failure.error, "Processing failed");
        assert_eq!(failure.details.as_deref(), Some("model unavailable"));
    }

    #[test]
    fn error_field_wins_over_report_fields() {
        // The outcome is either/or: a body carrying `error` is a failure
        // even if report fields ride along.
        let json = r#"{
            "error": "Rate limit exceeded",
            "match_percentage": 72,
            "readiness_score": 55,
            "matched_skills": [],
            "missing_skills": []
        }"#;

        let outcome = decode_outcome(429, false, json).unwrap();
        assert!(matches!(outcome, AnalysisOutcome::Failure(f) if f.error == "Rate limit exceeded"));
    }

    #[test]
    fn non_json_body_on_error_status_reports_the_status() {
        let err = decode_outcome(502, false, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, AppError::Server(502));
    }

    #[test]
    fn non_json_body_on_success_status_is_a_decode_error() {
        let err = decode_outcome(200, true, "not json at all").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn truncated_report_is_not_silently_accepted() {
        // Missing skill lists must not produce a partially-filled report.
        let json = r#"{"match_percentage": 72, "readiness_score": 55}"#;

        let err = decode_outcome(200, true, json).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn report_roundtrips_through_serde() {
        let report = AnalysisReport {
            match_percentage: 72.0,
            readiness_score: 55.0,
            matched_skills: vec!["Python".to_string()],
            missing_skills: vec!["Docker".to_string()],
        };

        let json = serde_json::to_string(&report).unwrap();
        let decoded: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, report);
    }
}
