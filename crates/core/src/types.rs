/// Primary key type for every table (database-generated UUID v4).
pub type DbId = uuid::Uuid;

/// All timestamps are stored and transported as UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
