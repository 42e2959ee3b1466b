//! The persistence contract consumed by the request chains.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use marquee_core::types::DbId;

use crate::models::movie::Movie;
use crate::models::review::{Review, ReviewCriticRow};

/// Errors surfaced by any [`CatalogStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read/list/update/delete access to the movie catalog, keyed by id.
///
/// Implementations own all consistency guarantees for concurrent writes.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn read_movie(&self, id: DbId) -> StoreResult<Option<Movie>>;

    async fn list_movies(&self, showing_only: bool) -> StoreResult<Vec<Movie>>;

    async fn read_review(&self, id: DbId) -> StoreResult<Option<Review>>;

    /// Reviews of one movie, each pre-joined with its critic.
    async fn list_reviews_for_movie(&self, movie_id: DbId) -> StoreResult<Vec<ReviewCriticRow>>;

    /// Persist the review's mutable fields and return the stored row.
    async fn update_review(&self, review: &Review) -> StoreResult<Review>;

    async fn delete_review(&self, id: DbId) -> StoreResult<()>;

    async fn health_check(&self) -> StoreResult<()>;
}
