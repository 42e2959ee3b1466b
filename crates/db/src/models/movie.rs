//! Movie entity model.

use marquee_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `movies` table. Read-only through this service.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub movie_id: DbId,
    pub title: String,
    pub runtime_in_minutes: Option<i32>,
    pub rating: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Whether the movie is currently showing in at least one theater.
    pub is_showing: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
