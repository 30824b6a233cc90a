//! Suggestion entity model and DTOs.

use cdi_core::clinical_note::{validate_priority, validate_text, DEFAULT_PRIORITY};
use cdi_core::error::CoreError;
use cdi_core::ids::resolve_id;
use cdi_core::suggestion::{
    validate_amount, validate_confidence, validate_feedback, MAX_CATEGORY_LENGTH, MAX_TYPE_LENGTH,
};
use cdi_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `suggestions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: EntityId,
    pub note_id: EntityId,
    #[serde(rename = "type")]
    pub suggestion_type: String,
    pub priority: String,
    pub category: String,
    pub description: String,
    pub original_text: String,
    pub suggested_text: String,
    pub reasoning: String,
    pub revenue_impact: f64,
    pub confidence: f64,
    pub status: String,
    pub line_number: Option<i32>,
    pub feedback: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body item for creating a suggestion under a note.
///
/// New suggestions always start `pending`; status is not accepted here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSuggestion {
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub suggestion_type: String,
    pub priority: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub original_text: String,
    #[serde(default)]
    pub suggested_text: String,
    #[serde(default)]
    pub reasoning: String,
    #[validate(range(min = 0.0))]
    pub revenue_impact: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: Option<f64>,
    #[validate(range(min = 0))]
    pub line_number: Option<i32>,
}

/// A validated suggestion ready for insertion under a note.
#[derive(Debug, Clone)]
pub struct NewSuggestion {
    pub id: EntityId,
    pub suggestion_type: String,
    pub priority: String,
    pub category: String,
    pub description: String,
    pub original_text: String,
    pub suggested_text: String,
    pub reasoning: String,
    pub revenue_impact: f64,
    pub confidence: f64,
    pub line_number: Option<i32>,
}

impl CreateSuggestion {
    /// Validate the request and resolve defaults (id, priority, amounts).
    pub fn prepare(&self) -> Result<NewSuggestion, CoreError> {
        // Text fields are checked by wire name; the derive covers the numbers.
        for (field, value, max_len) in [
            ("type", &self.suggestion_type, Some(MAX_TYPE_LENGTH)),
            ("category", &self.category, Some(MAX_CATEGORY_LENGTH)),
            ("description", &self.description, None),
            ("originalText", &self.original_text, None),
            ("suggestedText", &self.suggested_text, None),
            ("reasoning", &self.reasoning, None),
        ] {
            validate_text(field, value, max_len)?;
        }
        self.validate()?;

        let priority = self.priority.as_deref().unwrap_or(DEFAULT_PRIORITY);
        validate_priority("priority", priority)?;

        let revenue_impact = self.revenue_impact.unwrap_or(0.0);
        validate_amount("revenueImpact", revenue_impact)?;

        let confidence = self.confidence.unwrap_or(0.0);
        validate_confidence(confidence)?;

        Ok(NewSuggestion {
            id: resolve_id(self.id.as_deref())?,
            suggestion_type: self.suggestion_type.clone(),
            priority: priority.to_string(),
            category: self.category.clone(),
            description: self.description.clone(),
            original_text: self.original_text.clone(),
            suggested_text: self.suggested_text.clone(),
            reasoning: self.reasoning.clone(),
            revenue_impact,
            confidence,
            line_number: self.line_number,
        })
    }
}

#[cfg(test)]
impl CreateSuggestion {
    pub(crate) fn sample() -> Self {
        Self {
            suggestion_type: "Specificity".into(),
            category: "Diagnosis Specificity".into(),
            description: "Specify type of myocardial infarction".into(),
            original_text: "acute myocardial infarction".into(),
            suggested_text: "acute ST-elevation myocardial infarction of inferior wall".into(),
            reasoning: "STEMI location affects DRG assignment.".into(),
            revenue_impact: Some(1200.0),
            confidence: Some(0.92),
            line_number: Some(45),
            ..Default::default()
        }
    }
}

/// Optional body of the accept / reject endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewSuggestion {
    pub feedback: Option<String>,
}

impl ReviewSuggestion {
    pub fn validate_feedback(&self) -> Result<(), CoreError> {
        validate_feedback(self.feedback.as_deref())
    }
}

/// Result of applying a review decision in the store.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome {
    /// The suggestion was pending and now carries the decision.
    Applied(Suggestion),
    /// The suggestion had already been decided; it is returned unchanged.
    AlreadyDecided(Suggestion),
    /// No suggestion has the given id.
    NotFound,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_prepare_applies_defaults() {
        let req = CreateSuggestion {
            priority: None,
            revenue_impact: None,
            confidence: None,
            ..CreateSuggestion::sample()
        };
        let new = req.prepare().unwrap();
        assert_eq!(new.priority, "medium");
        assert_eq!(new.revenue_impact, 0.0);
        assert_eq!(new.confidence, 0.0);
        assert_eq!(new.id.len(), 36);
    }

    #[test]
    fn test_missing_text_field_rejected() {
        let req = CreateSuggestion {
            reasoning: String::new(),
            ..CreateSuggestion::sample()
        };
        assert_matches!(req.prepare(), Err(CoreError::Validation(msg)) if msg.contains("reasoning"));
    }

    #[test]
    fn test_blank_text_field_rejected() {
        let req = CreateSuggestion {
            category: "   ".into(),
            ..CreateSuggestion::sample()
        };
        assert_matches!(req.prepare(), Err(CoreError::Validation(msg)) if msg.contains("category"));
    }

    #[test]
    fn test_type_errors_name_the_wire_field() {
        for bad in [String::new(), "x".repeat(MAX_TYPE_LENGTH + 1)] {
            let req = CreateSuggestion {
                suggestion_type: bad,
                ..CreateSuggestion::sample()
            };
            assert_matches!(
                req.prepare(),
                Err(CoreError::Validation(msg)) if msg.contains("type") && !msg.contains("suggestionType")
            );
        }
    }

    #[test]
    fn test_category_length_limit() {
        let req = CreateSuggestion {
            category: "c".repeat(MAX_CATEGORY_LENGTH),
            ..CreateSuggestion::sample()
        };
        assert!(req.prepare().is_ok());

        let req = CreateSuggestion {
            category: "c".repeat(MAX_CATEGORY_LENGTH + 1),
            ..CreateSuggestion::sample()
        };
        assert_matches!(req.prepare(), Err(CoreError::Validation(msg)) if msg.contains("category"));
    }

    #[test]
    fn test_out_of_range_numbers_rejected() {
        let req = CreateSuggestion {
            confidence: Some(1.5),
            ..CreateSuggestion::sample()
        };
        assert_matches!(req.prepare(), Err(CoreError::Validation(msg)) if msg.contains("confidence"));

        let req = CreateSuggestion {
            revenue_impact: Some(-1.0),
            ..CreateSuggestion::sample()
        };
        assert_matches!(req.prepare(), Err(CoreError::Validation(msg)) if msg.contains("revenueImpact"));

        let req = CreateSuggestion {
            line_number: Some(-3),
            ..CreateSuggestion::sample()
        };
        assert_matches!(req.prepare(), Err(CoreError::Validation(msg)) if msg.contains("lineNumber"));
    }

    #[test]
    fn test_bad_priority_rejected() {
        let req = CreateSuggestion {
            priority: Some("urgent".into()),
            ..CreateSuggestion::sample()
        };
        assert!(req.prepare().is_err());
    }
}
