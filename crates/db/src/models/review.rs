//! Review entity model, update payload, and the critic-enriched projection.

use marquee_core::error::CoreError;
use marquee_core::review::{validate_content, validate_score};
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::critic::Critic;

/// A row from the `reviews` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Review {
    pub review_id: DbId,
    pub content: String,
    pub score: i32,
    pub critic_id: DbId,
    pub movie_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Caller-supplied fields for `PUT /reviews/{review_id}`. All fields optional.
///
/// Any other key in the payload, `review_id` included, is ignored whatever
/// its type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewPatch {
    pub content: Option<String>,
    pub score: Option<i32>,
}

impl ReviewPatch {
    /// Check every supplied field against the review rules.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(content) = &self.content {
            validate_content(content)?;
        }
        if let Some(score) = self.score {
            validate_score(score)?;
        }
        Ok(())
    }
}

impl Review {
    /// Merge a patch over this review. Supplied fields win; the identity is
    /// always the existing `review_id`.
    pub fn merged(&self, patch: ReviewPatch) -> Review {
        let ReviewPatch { content, score } = patch;

        Review {
            review_id: self.review_id,
            content: content.unwrap_or_else(|| self.content.clone()),
            score: score.unwrap_or(self.score),
            ..self.clone()
        }
    }
}

/// A review row joined with its critic's columns.
///
/// Critic timestamps are aliased so they do not collide with the review's.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ReviewCriticRow {
    pub review_id: DbId,
    pub content: String,
    pub score: i32,
    pub critic_id: DbId,
    pub movie_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub preferred_name: String,
    pub surname: String,
    pub organization_name: String,
    pub critic_created_at: Timestamp,
    pub critic_updated_at: Timestamp,
}

/// Response shape for reviews listed under a movie: the review's own fields
/// plus its critic as a nested object.
///
/// `critic.critic_id` always equals `critic_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewProjection {
    pub review_id: DbId,
    pub content: String,
    pub score: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub critic_id: DbId,
    pub movie_id: DbId,
    pub critic: Critic,
}

impl From<ReviewCriticRow> for ReviewProjection {
    fn from(row: ReviewCriticRow) -> Self {
        let critic = Critic {
            critic_id: row.critic_id,
            preferred_name: row.preferred_name,
            surname: row.surname,
            organization_name: row.organization_name,
            created_at: row.critic_created_at,
            updated_at: row.critic_updated_at,
        };

        ReviewProjection {
            review_id: row.review_id,
            content: row.content,
            score: row.score,
            created_at: row.created_at,
            updated_at: row.updated_at,
            critic_id: row.critic_id,
            movie_id: row.movie_id,
            critic,
        }
    }
}
