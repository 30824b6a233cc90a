//! Suggestion constants and field validation.
//!
//! Status values here are the states of the review state machine in
//! [`crate::suggestion_review`].

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status: the suggestion awaits a reviewer decision.
pub const STATUS_PENDING: &str = "pending";
/// The reviewer applied the suggestion.
pub const STATUS_ACCEPTED: &str = "accepted";
/// The reviewer declined the suggestion.
pub const STATUS_REJECTED: &str = "rejected";

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

pub const MAX_TYPE_LENGTH: usize = 50;
pub const MAX_CATEGORY_LENGTH: usize = 100;
pub const MAX_FEEDBACK_LENGTH: usize = 10_000;

pub const MIN_CONFIDENCE: f64 = 0.0;
pub const MAX_CONFIDENCE: f64 = 1.0;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Confidence is a probability in `[0, 1]`.
pub fn validate_confidence(confidence: f64) -> Result<(), CoreError> {
    if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&confidence) {
        return Err(CoreError::invalid_field(
            "confidence",
            format!("{confidence} is outside [{MIN_CONFIDENCE}, {MAX_CONFIDENCE}]"),
        ));
    }
    Ok(())
}

/// Monetary amounts are finite and non-negative.
pub fn validate_amount(field: &str, amount: f64) -> Result<(), CoreError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(CoreError::invalid_field(
            field,
            format!("{amount} must be a non-negative amount"),
        ));
    }
    Ok(())
}

/// Reviewer feedback, when given, is bounded.
pub fn validate_feedback(feedback: Option<&str>) -> Result<(), CoreError> {
    if let Some(f) = feedback {
        if f.chars().count() > MAX_FEEDBACK_LENGTH {
            return Err(CoreError::invalid_field(
                "feedback",
                format!("must be at most {MAX_FEEDBACK_LENGTH} characters"),
            ));
        }
    }
    Ok(())
}
