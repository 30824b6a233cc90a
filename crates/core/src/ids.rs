//! Identifier assignment for notes and suggestions.

use crate::error::CoreError;
use crate::types::EntityId;

/// Maximum length of a caller-supplied identifier.
pub const MAX_ID_LENGTH: usize = 50;

/// Use the caller-supplied identifier if present, otherwise generate one.
///
/// Supplied ids must be non-empty, at most [`MAX_ID_LENGTH`] characters,
/// free of surrounding whitespace, and must not contain `/` (they appear as
/// path segments at the HTTP boundary).
pub fn resolve_id(supplied: Option<&str>) -> Result<EntityId, CoreError> {
    match supplied {
        None => Ok(generate_id()),
        Some(id) => {
            validate_id(id)?;
            Ok(id.to_string())
        }
    }
}

/// Generate a fresh identifier (UUID v4, hyphenated).
pub fn generate_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}

fn validate_id(id: &str) -> Result<(), CoreError> {
    if id.is_empty() {
        return Err(CoreError::invalid_field("id", "must not be empty"));
    }
    if id.trim() != id {
        return Err(CoreError::invalid_field(
            "id",
            "must not have leading or trailing whitespace",
        ));
    }
    if id.chars().count() > MAX_ID_LENGTH {
        return Err(CoreError::invalid_field(
            "id",
            format!("must be at most {MAX_ID_LENGTH} characters"),
        ));
    }
    if id.contains('/') {
        return Err(CoreError::invalid_field("id", "must not contain '/'"));
    }
    Ok(())
}
