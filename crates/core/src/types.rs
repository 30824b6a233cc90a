/// Surrogate keys of append-only tables are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Note and suggestion identifiers are caller-supplied or generated strings.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (admission, discharge, metric dates) carry no time zone.
pub type CalendarDate = chrono::NaiveDate;
