pub mod analytics;
pub mod dashboard;
pub mod notes;
pub mod suggestions;
