//! Clinical note entity model and DTOs.

use cdi_core::clinical_note::{
    parse_calendar_date, require_text, validate_assignee, validate_note_status,
    validate_priority, validate_stay_dates, validate_text, DEFAULT_PRIORITY,
    MAX_DEPARTMENT_LENGTH, MAX_NOTE_TYPE_LENGTH, MAX_PATIENT_ID_LENGTH,
    MAX_PATIENT_NAME_LENGTH, NOTE_STATUS_PENDING,
};
use cdi_core::error::CoreError;
use cdi_core::ids::resolve_id;
use cdi_core::types::{CalendarDate, EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::suggestion::{CreateSuggestion, NewSuggestion, Suggestion};

/// Time-of-day format used for the `lastUpdated` field.
pub const LAST_UPDATED_FORMAT: &str = "%H:%M:%S";

/// A row from the `notes` table, with its derived suggestion aggregates.
///
/// `suggestions_count` and `potential_revenue` are not stored; every note
/// query computes them from the owned suggestions.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(into = "NoteView")]
pub struct Note {
    pub id: EntityId,
    pub patient_id: String,
    pub patient_name: String,
    pub note_type: String,
    pub department: String,
    pub admission_date: CalendarDate,
    pub discharge_date: CalendarDate,
    pub priority: String,
    pub status: String,
    pub content: String,
    pub suggestions_count: i64,
    pub potential_revenue: f64,
    pub assigned_to: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// External representation of a [`Note`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteView {
    pub id: EntityId,
    pub patient_id: String,
    pub patient_name: String,
    pub note_type: String,
    pub department: String,
    pub admission_date: CalendarDate,
    pub discharge_date: CalendarDate,
    pub priority: String,
    pub status: String,
    pub content: String,
    pub suggestions_count: i64,
    pub potential_revenue: f64,
    pub assigned_to: Option<String>,
    pub last_updated: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Note> for NoteView {
    fn from(n: Note) -> Self {
        Self {
            last_updated: n.updated_at.format(LAST_UPDATED_FORMAT).to_string(),
            id: n.id,
            patient_id: n.patient_id,
            patient_name: n.patient_name,
            note_type: n.note_type,
            department: n.department,
            admission_date: n.admission_date,
            discharge_date: n.discharge_date,
            priority: n.priority,
            status: n.status,
            content: n.content,
            suggestions_count: n.suggestions_count,
            potential_revenue: n.potential_revenue,
            assigned_to: n.assigned_to,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}

/// A note together with every suggestion it owns, in creation order.
#[derive(Debug, Clone, Serialize)]
pub struct NoteWithSuggestions {
    #[serde(flatten)]
    pub note: Note,
    pub suggestions: Vec<Suggestion>,
}

/// Request body for creating a note.
///
/// Every field is optional at the wire level so a missing field surfaces as
/// a validation error naming it, rather than a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNote {
    pub id: Option<String>,
    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
    pub note_type: Option<String>,
    pub department: Option<String>,
    pub admission_date: Option<String>,
    pub discharge_date: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub content: Option<String>,
    pub assigned_to: Option<String>,
    /// Suggestions to create in the same transaction as the note.
    #[serde(default)]
    pub suggestions: Vec<CreateSuggestion>,
}

/// A validated note ready for insertion.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub id: EntityId,
    pub patient_id: String,
    pub patient_name: String,
    pub note_type: String,
    pub department: String,
    pub admission_date: CalendarDate,
    pub discharge_date: CalendarDate,
    pub priority: String,
    pub status: String,
    pub content: String,
    pub assigned_to: Option<String>,
    pub suggestions: Vec<NewSuggestion>,
}

impl CreateNote {
    /// Validate the request and resolve defaults (id, priority, status).
    pub fn prepare(&self) -> Result<NewNote, CoreError> {
        let patient_id = require_text(
            "patientId",
            self.patient_id.as_deref(),
            Some(MAX_PATIENT_ID_LENGTH),
        )?;
        let patient_name = require_text(
            "patientName",
            self.patient_name.as_deref(),
            Some(MAX_PATIENT_NAME_LENGTH),
        )?;
        let note_type = require_text(
            "noteType",
            self.note_type.as_deref(),
            Some(MAX_NOTE_TYPE_LENGTH),
        )?;
        let department = require_text(
            "department",
            self.department.as_deref(),
            Some(MAX_DEPARTMENT_LENGTH),
        )?;
        let content = require_text("content", self.content.as_deref(), None)?;

        let admission_date = parse_calendar_date("admissionDate", self.admission_date.as_deref())?;
        let discharge_date = parse_calendar_date("dischargeDate", self.discharge_date.as_deref())?;
        validate_stay_dates(admission_date, discharge_date)?;

        let priority = self.priority.as_deref().unwrap_or(DEFAULT_PRIORITY);
        validate_priority("priority", priority)?;

        let status = self.status.as_deref().unwrap_or(NOTE_STATUS_PENDING);
        validate_note_status(status)?;

        validate_assignee(self.assigned_to.as_deref())?;

        let suggestions = self
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| {
                s.prepare().map_err(|e| match e {
                    CoreError::Validation(msg) => {
                        CoreError::Validation(format!("suggestions[{i}]: {msg}"))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewNote {
            id: resolve_id(self.id.as_deref())?,
            patient_id: patient_id.to_string(),
            patient_name: patient_name.to_string(),
            note_type: note_type.to_string(),
            department: department.to_string(),
            admission_date,
            discharge_date,
            priority: priority.to_string(),
            status: status.to_string(),
            content: content.to_string(),
            assigned_to: self.assigned_to.clone(),
            suggestions,
        })
    }
}

/// Request body for patching a note. Only provided fields change.
///
/// Patient identity and stay dates are fixed at creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNote {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub department: Option<String>,
    pub note_type: Option<String>,
    pub content: Option<String>,
}

impl UpdateNote {
    /// Validate each provided field as it would be validated on create.
    pub fn validate_patch(&self) -> Result<(), CoreError> {
        if let Some(status) = &self.status {
            validate_note_status(status)?;
        }
        if let Some(priority) = &self.priority {
            validate_priority("priority", priority)?;
        }
        validate_assignee(self.assigned_to.as_deref())?;
        if let Some(department) = &self.department {
            validate_text("department", department, Some(MAX_DEPARTMENT_LENGTH))?;
        }
        if let Some(note_type) = &self.note_type {
            validate_text("noteType", note_type, Some(MAX_NOTE_TYPE_LENGTH))?;
        }
        if let Some(content) = &self.content {
            validate_text("content", content, None)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;

    fn valid_request() -> CreateNote {
        CreateNote {
            patient_id: Some("P1".into()),
            patient_name: Some("A B".into()),
            note_type: Some("X".into()),
            department: Some("Cardiology".into()),
            admission_date: Some("2024-01-01".into()),
            discharge_date: Some("2024-01-02".into()),
            content: Some("...".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_prepare_applies_defaults() {
        let new = valid_request().prepare().unwrap();
        assert_eq!(new.priority, "medium");
        assert_eq!(new.status, "pending");
        assert_eq!(new.id.len(), 36);
        assert_eq!(new.admission_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(new.suggestions.is_empty());
    }

    #[test]
    fn test_prepare_keeps_supplied_id() {
        let req = CreateNote {
            id: Some("N001".into()),
            ..valid_request()
        };
        assert_eq!(req.prepare().unwrap().id, "N001");
    }

    #[test]
    fn test_missing_field_is_named() {
        let req = CreateNote {
            patient_name: None,
            ..valid_request()
        };
        assert_matches!(
            req.prepare(),
            Err(CoreError::Validation(msg)) if msg.starts_with("patientName")
        );
    }

    #[test]
    fn test_discharge_before_admission_rejected() {
        let req = CreateNote {
            admission_date: Some("2024-01-05".into()),
            discharge_date: Some("2024-01-02".into()),
            ..valid_request()
        };
        assert_matches!(
            req.prepare(),
            Err(CoreError::Validation(msg)) if msg.starts_with("dischargeDate")
        );
    }

    #[test]
    fn test_out_of_set_priority_and_status_rejected() {
        let req = CreateNote {
            priority: Some("urgent".into()),
            ..valid_request()
        };
        assert!(req.prepare().is_err());

        let req = CreateNote {
            status: Some("archived".into()),
            ..valid_request()
        };
        assert!(req.prepare().is_err());
    }

    #[test]
    fn test_invalid_nested_suggestion_is_indexed() {
        let req = CreateNote {
            suggestions: vec![CreateSuggestion {
                revenue_impact: Some(-5.0),
                ..CreateSuggestion::sample()
            }],
            ..valid_request()
        };
        assert_matches!(
            req.prepare(),
            Err(CoreError::Validation(msg)) if msg.starts_with("suggestions[0]") && msg.contains("revenueImpact")
        );
    }

    #[test]
    fn test_view_uses_external_names() {
        let updated_at = Utc.with_ymd_and_hms(2024, 6, 18, 14, 5, 9).unwrap();
        let note = Note {
            id: "N001".into(),
            patient_id: "P12847".into(),
            patient_name: "Sarah Johnson".into(),
            note_type: "Discharge Summary".into(),
            department: "Cardiology".into(),
            admission_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            discharge_date: NaiveDate::from_ymd_opt(2024, 6, 18).unwrap(),
            priority: "high".into(),
            status: "pending".into(),
            content: "DISCHARGE SUMMARY".into(),
            suggestions_count: 3,
            potential_revenue: 2400.0,
            assigned_to: None,
            created_at: updated_at,
            updated_at,
        };
        let view = NoteView::from(note);
        assert_eq!(view.last_updated, "14:05:09");
        assert_eq!(view.admission_date.to_string(), "2024-06-15");
        assert_eq!(view.patient_name, "Sarah Johnson");
    }

    #[test]
    fn test_patch_validation() {
        assert!(UpdateNote::default().validate_patch().is_ok());
        let patch = UpdateNote {
            status: Some("in-review".into()),
            assigned_to: Some("Dr. Smith".into()),
            ..Default::default()
        };
        assert!(patch.validate_patch().is_ok());
        let patch = UpdateNote {
            priority: Some("critical".into()),
            ..Default::default()
        };
        assert!(patch.validate_patch().is_err());
        let patch = UpdateNote {
            content: Some(" ".into()),
            ..Default::default()
        };
        assert!(patch.validate_patch().is_err());
    }
}
