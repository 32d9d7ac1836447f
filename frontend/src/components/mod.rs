//! UI Components for the SkillScope application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with branding
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`AnalyzeForm`] - Resume upload form and submission handler
//! - [`LoadingIndicator`] - Shown while an analysis is in flight
//! - [`ErrorNotice`] - Single-line failure display
//! - [`ResultsSection`] - Score bars and skill tags

mod analyze_form;
mod footer;
mod header;
mod hero;
mod loading;
mod results;

pub use analyze_form::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use loading::*;
pub use results::*;
