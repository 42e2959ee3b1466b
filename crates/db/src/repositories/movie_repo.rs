//! Repository for the `movies` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::Movie;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "movie_id, title, runtime_in_minutes, rating, description, \
                       image_url, is_showing, created_at, updated_at";

/// Provides read access to movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE movie_id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies, optionally only those currently showing.
    ///
    /// Ordered by `movie_id` so repeated calls return the same sequence.
    pub async fn list(pool: &PgPool, showing_only: bool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = if showing_only {
            format!("SELECT {COLUMNS} FROM movies WHERE is_showing = true ORDER BY movie_id")
        } else {
            format!("SELECT {COLUMNS} FROM movies ORDER BY movie_id")
        };
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }
}
