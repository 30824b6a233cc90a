//! Validation for persisted metric history samples.

use chrono::NaiveDate;

use crate::error::CoreError;

pub const MAX_METRIC_NAME_LENGTH: usize = 100;
pub const MAX_USER_ID_LENGTH: usize = 50;

/// Metric values must be real numbers.
pub fn validate_metric_value(value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::invalid_field(
            "metricValue",
            "must be a finite number",
        ));
    }
    Ok(())
}

/// An inclusive `[from, to]` window must not be inverted.
pub fn validate_date_window(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<(), CoreError> {
    if let (Some(from), Some(to)) = (from, to) {
        if to < from {
            return Err(CoreError::invalid_field(
                "to",
                format!("{to} precedes from {from}"),
            ));
        }
    }
    Ok(())
}
