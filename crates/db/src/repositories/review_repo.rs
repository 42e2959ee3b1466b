//! Repository for the `reviews` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{Review, ReviewCriticRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "review_id, content, score, critic_id, movie_id, created_at, updated_at";

/// Provides read, update and delete operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Find a review by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE review_id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every review of a movie joined with its critic's columns.
    pub async fn list_by_movie_with_critic(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<ReviewCriticRow>, sqlx::Error> {
        sqlx::query_as::<_, ReviewCriticRow>(
            "SELECT r.review_id, r.content, r.score, r.critic_id, r.movie_id, \
                    r.created_at, r.updated_at, \
                    c.preferred_name, c.surname, c.organization_name, \
                    c.created_at AS critic_created_at, c.updated_at AS critic_updated_at \
             FROM reviews r \
             JOIN critics c ON c.critic_id = r.critic_id \
             WHERE r.movie_id = $1 \
             ORDER BY r.review_id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Persist a review's mutable fields (`content`, `score`) and bump
    /// `updated_at`.
    ///
    /// Returns `RowNotFound` if the row was deleted in the meantime.
    pub async fn update(pool: &PgPool, review: &Review) -> Result<Review, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET \
                content = $2, \
                score = $3, \
                updated_at = NOW() \
             WHERE review_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(review.review_id)
            .bind(&review.content)
            .bind(review.score)
            .fetch_one(pool)
            .await
    }

    /// Hard-delete a review. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
