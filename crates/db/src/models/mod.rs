//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO and the validated insert struct it prepares
//! - Any patch or query DTOs the entity supports

pub mod dashboard;
pub mod metric_sample;
pub mod note;
pub mod suggestion;
