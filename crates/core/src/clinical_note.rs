//! Clinical note constants and validation functions.
//!
//! Defines the priority and status vocabularies, field limits, and the
//! checks applied before a note is created or patched.

use chrono::NaiveDate;

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Priorities (shared by notes and suggestions)
-------------------------------------------------------------------------- */

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_HIGH: &str = "high";

/// All valid priority values.
pub const VALID_PRIORITIES: &[&str] = &[PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_HIGH];

/// Priority assigned when the caller does not provide one.
pub const DEFAULT_PRIORITY: &str = PRIORITY_MEDIUM;

/* --------------------------------------------------------------------------
Note statuses
-------------------------------------------------------------------------- */

/// Note is waiting for a reviewer.
pub const NOTE_STATUS_PENDING: &str = "pending";

/// A reviewer is working through the note.
pub const NOTE_STATUS_IN_REVIEW: &str = "in-review";

/// Review of the note is finished.
pub const NOTE_STATUS_COMPLETED: &str = "completed";

/// All valid note status values.
pub const VALID_NOTE_STATUSES: &[&str] = &[
    NOTE_STATUS_PENDING,
    NOTE_STATUS_IN_REVIEW,
    NOTE_STATUS_COMPLETED,
];

/* --------------------------------------------------------------------------
Field limits
-------------------------------------------------------------------------- */

pub const MAX_PATIENT_ID_LENGTH: usize = 50;
pub const MAX_PATIENT_NAME_LENGTH: usize = 100;
pub const MAX_NOTE_TYPE_LENGTH: usize = 50;
pub const MAX_DEPARTMENT_LENGTH: usize = 50;
pub const MAX_ASSIGNEE_LENGTH: usize = 100;

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate that a priority string is one of the accepted values.
pub fn validate_priority(field: &str, priority: &str) -> Result<(), CoreError> {
    if VALID_PRIORITIES.contains(&priority) {
        Ok(())
    } else {
        Err(CoreError::invalid_field(
            field,
            format!(
                "invalid priority '{priority}'. Must be one of: {}",
                VALID_PRIORITIES.join(", ")
            ),
        ))
    }
}

/// Validate that a note status string is one of the accepted values.
pub fn validate_note_status(status: &str) -> Result<(), CoreError> {
    if VALID_NOTE_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::invalid_field(
            "status",
            format!(
                "invalid note status '{status}'. Must be one of: {}",
                VALID_NOTE_STATUSES.join(", ")
            ),
        ))
    }
}

/// Require a present, non-blank text value no longer than `max_len` characters.
///
/// `max_len` of `None` means unbounded (long-form text such as note content).
pub fn require_text<'a>(
    field: &str,
    value: Option<&'a str>,
    max_len: Option<usize>,
) -> Result<&'a str, CoreError> {
    let value = value.ok_or_else(|| CoreError::invalid_field(field, "is required"))?;
    validate_text(field, value, max_len)?;
    Ok(value)
}

/// Validate a non-blank text value no longer than `max_len` characters.
pub fn validate_text(field: &str, value: &str, max_len: Option<usize>) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::invalid_field(field, "must not be blank"));
    }
    if let Some(max) = max_len {
        if value.chars().count() > max {
            return Err(CoreError::invalid_field(
                field,
                format!("must be at most {max} characters"),
            ));
        }
    }
    Ok(())
}

/// Parse a required `YYYY-MM-DD` calendar date.
pub fn parse_calendar_date(field: &str, value: Option<&str>) -> Result<NaiveDate, CoreError> {
    let value = value.ok_or_else(|| CoreError::invalid_field(field, "is required"))?;
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        CoreError::invalid_field(field, format!("'{value}' is not a YYYY-MM-DD date"))
    })
}

/// A stay must not end before it starts.
pub fn validate_stay_dates(admission: NaiveDate, discharge: NaiveDate) -> Result<(), CoreError> {
    if discharge < admission {
        return Err(CoreError::invalid_field(
            "dischargeDate",
            format!("{discharge} precedes admissionDate {admission}"),
        ));
    }
    Ok(())
}

/// Validate an optional assignee: when present it must be non-blank and bounded.
pub fn validate_assignee(assignee: Option<&str>) -> Result<(), CoreError> {
    match assignee {
        Some(a) => validate_text("assignedTo", a, Some(MAX_ASSIGNEE_LENGTH)),
        None => Ok(()),
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
