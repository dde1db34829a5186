/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Whole-riyal amounts. Listing prices have no fractional part.
pub type SarAmount = i64;
