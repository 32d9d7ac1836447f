//! Application configuration.
//!
//! Centralized configuration for the SkillScope frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// Empty means same-origin: the frontend is served by the same host
/// that exposes the analysis API.
pub const API_BASE_URL: &str = "";

/// Resume analysis endpoint path.
pub const ANALYZE_PATH: &str = "/api/analyze-resume/";

/// Role profile listing endpoint path.
pub const ROLES_PATH: &str = "/api/roles/";

/// Application name.
///
/// Shown in the document title.
pub const APP_NAME: &str = "SkillScope";

/// Upper bound on how long an analysis request may stay in flight (ms).
///
/// LLM-backed analysis of a large resume can take tens of seconds.
pub const REQUEST_TIMEOUT_MS: u32 = 90_000;
