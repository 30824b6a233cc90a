//! Domain rules for clinical documentation review.
//!
//! Everything here is pure: constants, validation, the note filter
//! configuration, the suggestion review state machine and dashboard
//! arithmetic. The `cdi-db` and `cdi-api` crates build on these.

pub mod clinical_note;
pub mod error;
pub mod ids;
pub mod metric_sample;
pub mod metrics;
pub mod note_filter;
pub mod suggestion;
pub mod suggestion_review;
pub mod types;
