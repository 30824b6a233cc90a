//! Metric history sample model and DTOs.
//!
//! Samples are append-only point-in-time records used for historical
//! analytics. The live dashboard does not read them.

use cdi_core::clinical_note::{parse_calendar_date, validate_text, MAX_DEPARTMENT_LENGTH};
use cdi_core::error::CoreError;
use cdi_core::metric_sample::{
    validate_date_window, validate_metric_value, MAX_METRIC_NAME_LENGTH, MAX_USER_ID_LENGTH,
};
use cdi_core::types::{CalendarDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `metric_samples` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSample {
    pub id: DbId,
    pub metric_name: String,
    pub metric_value: f64,
    pub metric_date: CalendarDate,
    pub department: Option<String>,
    pub user_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for recording a sample.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMetricSample {
    pub metric_name: Option<String>,
    pub metric_value: Option<f64>,
    pub metric_date: Option<String>,
    pub department: Option<String>,
    pub user_id: Option<String>,
}

/// A validated sample ready for insertion.
#[derive(Debug, Clone)]
pub struct NewMetricSample {
    pub metric_name: String,
    pub metric_value: f64,
    pub metric_date: CalendarDate,
    pub department: Option<String>,
    pub user_id: Option<String>,
}

impl CreateMetricSample {
    pub fn prepare(&self) -> Result<NewMetricSample, CoreError> {
        let metric_name = self
            .metric_name
            .as_deref()
            .ok_or_else(|| CoreError::invalid_field("metricName", "is required"))?;
        validate_text("metricName", metric_name, Some(MAX_METRIC_NAME_LENGTH))?;

        let metric_value = self
            .metric_value
            .ok_or_else(|| CoreError::invalid_field("metricValue", "is required"))?;
        validate_metric_value(metric_value)?;

        let metric_date = parse_calendar_date("metricDate", self.metric_date.as_deref())?;

        if let Some(department) = &self.department {
            validate_text("department", department, Some(MAX_DEPARTMENT_LENGTH))?;
        }
        if let Some(user_id) = &self.user_id {
            validate_text("userId", user_id, Some(MAX_USER_ID_LENGTH))?;
        }

        Ok(NewMetricSample {
            metric_name: metric_name.to_string(),
            metric_value,
            metric_date,
            department: self.department.clone(),
            user_id: self.user_id.clone(),
        })
    }
}

/// Query parameters for listing samples (`?metricName=&department=&from=&to=`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSampleQuery {
    pub metric_name: Option<String>,
    pub department: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Parsed sample filter. `from` and `to` are inclusive.
#[derive(Debug, Clone, Default)]
pub struct MetricSampleFilter {
    pub metric_name: Option<String>,
    pub department: Option<String>,
    pub from: Option<CalendarDate>,
    pub to: Option<CalendarDate>,
}

impl MetricSampleQuery {
    pub fn prepare(&self) -> Result<MetricSampleFilter, CoreError> {
        let from = self
            .from
            .as_deref()
            .map(|d| parse_calendar_date("from", Some(d)))
            .transpose()?;
        let to = self
            .to
            .as_deref()
            .map(|d| parse_calendar_date("to", Some(d)))
            .transpose()?;
        validate_date_window(from, to)?;

        Ok(MetricSampleFilter {
            metric_name: non_blank(self.metric_name.as_deref()),
            department: non_blank(self.department.as_deref()),
            from,
            to,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_requires_name_value_and_date() {
        let ok = CreateMetricSample {
            metric_name: Some("acceptance_rate".into()),
            metric_value: Some(82.5),
            metric_date: Some("2024-06-30".into()),
            department: Some("Cardiology".into()),
            user_id: None,
        };
        assert_eq!(ok.prepare().unwrap().metric_value, 82.5);

        let missing_value = CreateMetricSample {
            metric_value: None,
            ..ok.clone()
        };
        assert!(missing_value.prepare().unwrap_err().to_string().contains("metricValue"));

        let bad_date = CreateMetricSample {
            metric_date: Some("June 30".into()),
            ..ok
        };
        assert!(bad_date.prepare().unwrap_err().to_string().contains("metricDate"));
    }

    #[test]
    fn test_query_parses_window() {
        let q = MetricSampleQuery {
            metric_name: Some(" ".into()),
            department: None,
            from: Some("2024-06-01".into()),
            to: Some("2024-06-30".into()),
        };
        let f = q.prepare().unwrap();
        assert!(f.metric_name.is_none());
        assert!(f.from.is_some() && f.to.is_some());

        let inverted = MetricSampleQuery {
            from: Some("2024-07-01".into()),
            to: Some("2024-06-01".into()),
            ..Default::default()
        };
        assert!(inverted.prepare().is_err());
    }
}
