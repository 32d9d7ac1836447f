//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Analysis Types** - Backend response structures
//! - **Role Types** - Target-role suggestion data
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Analysis Types
// =============================================================================

/// Body of an analysis response.
///
/// The backend answers with *either* an error record *or* a full report,
/// never a mix. Variants are tried in order, so a body carrying an `error`
/// field decodes as [`AnalysisOutcome::Failure`] even if other fields are
/// present alongside it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    /// Backend-signalled failure (`{"error": ...}`).
    Failure(AnalysisFailure),
    /// Successful analysis report.
    Report(AnalysisReport),
}

/// Backend-signalled analysis failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    /// Human-readable message, rendered to the user.
    pub error: String,
    /// Internal detail attached to processing failures. Logged, never rendered.
    #[serde(default)]
    pub details: Option<String>,
}

/// Successful analysis of a resume against a target role.
///
/// The backend sends more fields than these (extracted skills, roadmap,
/// live job listings, confidence score); anything not listed here is
/// ignored on decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Resume-to-role fit, expected in 0-100 but not enforced by the backend.
    pub match_percentage: f64,
    /// Overall candidate readiness, same expected range.
    pub readiness_score: f64,
    /// Skills found in the resume that the role requires, in backend order.
    pub matched_skills: Vec<String>,
    /// Required skills the resume lacks, in backend order.
    pub missing_skills: Vec<String>,
}

// =============================================================================
// Role Types
// =============================================================================

/// A target role known to the backend, with its required skill set.
///
/// Received from the role listing endpoint and used to suggest
/// target-role values in the form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    /// Role name (e.g. "Data Engineer").
    pub role: String,
    /// Skills the role requires.
    pub skills: Vec<String>,
    /// Profile revision number.
    pub version: u32,
    /// Whether the profile is locked against edits.
    pub locked: bool,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend request plumbing. Backend-signalled
/// analysis failures are data, not errors; see [`AnalysisOutcome::Failure`].
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Request could not be constructed (form payload, URL).
    Request(String),
    /// Network/HTTP transport failed.
    Network(String),
    /// Non-2xx status with a body that is not a JSON error record.
    Server(u16),
    /// Response body could not be decoded.
    Decode(String),
    /// No response within the configured deadline.
    Timeout,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Request(msg) => write!(f, "Request error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server(status) => write!(f, "Server error (status {})", status),
            AppError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            AppError::Timeout => write!(f, "The analysis request timed out"),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
