/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Resource kinds addressable by id through the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Movie,
    Review,
}

impl Entity {
    /// Fixed message returned to callers when a lookup by id misses.
    pub fn not_found_message(self) -> &'static str {
        match self {
            Entity::Movie => "Movie cannot be found",
            Entity::Review => "Review cannot be found.",
        }
    }
}

/// Parse a raw path segment into a [`DbId`].
///
/// Returns `None` for anything that is not a positive integer, so callers can
/// treat malformed ids the same as ids with no matching row.
pub fn parse_id(raw: &str) -> Option<DbId> {
    raw.trim().parse::<DbId>().ok().filter(|id| *id > 0)
}
