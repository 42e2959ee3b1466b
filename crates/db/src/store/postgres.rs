use async_trait::async_trait;
use marquee_core::types::DbId;

use super::{CatalogStore, StoreResult};
use crate::models::movie::Movie;
use crate::models::review::{Review, ReviewCriticRow};
use crate::repositories::{MovieRepo, ReviewRepo};
use crate::DbPool;

/// [`CatalogStore`] backed by PostgreSQL through the repositories.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgStore {
    async fn read_movie(&self, id: DbId) -> StoreResult<Option<Movie>> {
        Ok(MovieRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_movies(&self, showing_only: bool) -> StoreResult<Vec<Movie>> {
        Ok(MovieRepo::list(&self.pool, showing_only).await?)
    }

    async fn read_review(&self, id: DbId) -> StoreResult<Option<Review>> {
        Ok(ReviewRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_reviews_for_movie(&self, movie_id: DbId) -> StoreResult<Vec<ReviewCriticRow>> {
        Ok(ReviewRepo::list_by_movie_with_critic(&self.pool, movie_id).await?)
    }

    async fn update_review(&self, review: &Review) -> StoreResult<Review> {
        Ok(ReviewRepo::update(&self.pool, review).await?)
    }

    async fn delete_review(&self, id: DbId) -> StoreResult<()> {
        let deleted = ReviewRepo::delete(&self.pool, id).await?;
        if !deleted {
            tracing::debug!(review_id = id, "Review already gone at delete time");
        }
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
