/// Row ids are `BIGSERIAL` / `BIGINT` in every table.
pub type DbId = i64;

/// Timestamps are stored as `TIMESTAMPTZ` and handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
