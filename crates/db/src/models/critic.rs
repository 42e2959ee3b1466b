//! Critic entity model.

use marquee_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `critics` table. Only ever returned nested under a review.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Critic {
    pub critic_id: DbId,
    pub preferred_name: String,
    pub surname: String,
    pub organization_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
