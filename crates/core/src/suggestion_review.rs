//! Suggestion review state machine.
//!
//! ```text
//! pending --accept--> accepted
//! pending --reject--> rejected
//! ```
//!
//! `accepted` and `rejected` are terminal. Re-reviewing a terminal suggestion
//! is a conflict, not an overwrite.

use crate::error::CoreError;
use crate::suggestion::{STATUS_ACCEPTED, STATUS_PENDING, STATUS_REJECTED};

/// A reviewer's decision on a pending suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Accept,
    Reject,
}

impl ReviewDecision {
    /// Status the suggestion ends in after this decision.
    pub fn target_status(self) -> &'static str {
        match self {
            ReviewDecision::Accept => STATUS_ACCEPTED,
            ReviewDecision::Reject => STATUS_REJECTED,
        }
    }

    /// Verb used in log lines and error messages.
    pub fn verb(self) -> &'static str {
        match self {
            ReviewDecision::Accept => "accept",
            ReviewDecision::Reject => "reject",
        }
    }
}

/// The only status from which a review decision may be applied.
pub const REVIEWABLE_STATUS: &str = STATUS_PENDING;

/// Returns the set of statuses that `from_status` may transition to.
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        STATUS_PENDING => &[STATUS_ACCEPTED, STATUS_REJECTED],
        _ => &[],
    }
}

/// Validate applying `decision` to a suggestion currently in `current`.
///
/// Fails with [`CoreError::Conflict`] naming the current status when the
/// suggestion has already been decided.
pub fn validate_decision(
    suggestion_id: &str,
    current: &str,
    decision: ReviewDecision,
) -> Result<(), CoreError> {
    if valid_transitions(current).contains(&decision.target_status()) {
        Ok(())
    } else {
        Err(CoreError::Conflict(format!(
            "Cannot {} suggestion {suggestion_id}: it is already {current}",
            decision.verb()
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_pending_can_be_accepted_or_rejected() {
        assert!(validate_decision("S1", STATUS_PENDING, ReviewDecision::Accept).is_ok());
        assert!(validate_decision("S1", STATUS_PENDING, ReviewDecision::Reject).is_ok());
    }

    #[test]
    fn test_terminal_states_have_no_transitions() {
        assert!(valid_transitions(STATUS_ACCEPTED).is_empty());
        assert!(valid_transitions(STATUS_REJECTED).is_empty());
    }

    #[test]
    fn test_terminal_states_conflict() {
        for current in [STATUS_ACCEPTED, STATUS_REJECTED] {
            for decision in [ReviewDecision::Accept, ReviewDecision::Reject] {
                let err = validate_decision("S1", current, decision).unwrap_err();
                assert_matches!(err, CoreError::Conflict(msg) if msg.contains(current));
            }
        }
    }

    #[test]
    fn test_decision_targets() {
        assert_eq!(ReviewDecision::Accept.target_status(), "accepted");
        assert_eq!(ReviewDecision::Reject.target_status(), "rejected");
        assert_eq!(REVIEWABLE_STATUS, "pending");
    }
}
