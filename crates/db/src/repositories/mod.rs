//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-statement writes run in a
//! single transaction.

pub mod dashboard_repo;
pub mod metric_sample_repo;
pub mod note_repo;
pub mod suggestion_repo;

pub use dashboard_repo::DashboardRepo;
pub use metric_sample_repo::MetricSampleRepo;
pub use note_repo::NoteRepo;
pub use suggestion_repo::SuggestionRepo;
