//! In-process [`CatalogStore`] used by tests and local experiments.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use marquee_core::types::DbId;

use super::{CatalogStore, StoreError, StoreResult};
use crate::models::critic::Critic;
use crate::models::movie::Movie;
use crate::models::review::{Review, ReviewCriticRow};

#[derive(Debug, Default)]
struct Catalog {
    movies: BTreeMap<DbId, Movie>,
    critics: BTreeMap<DbId, Critic>,
    reviews: BTreeMap<DbId, Review>,
}

/// Catalog held in ordered maps behind a lock.
///
/// Clones share the same data. Every [`CatalogStore`] call is counted, and
/// [`MemoryStore::set_unavailable`] makes every call fail until reset.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    catalog: Arc<RwLock<Catalog>>,
    operations: Arc<AtomicUsize>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_movie(&self, movie: Movie) {
        self.write().movies.insert(movie.movie_id, movie);
    }

    pub fn insert_critic(&self, critic: Critic) {
        self.write().critics.insert(critic.critic_id, critic);
    }

    pub fn insert_review(&self, review: Review) {
        self.write().reviews.insert(review.review_id, review);
    }

    /// Number of [`CatalogStore`] calls made so far (seeding excluded).
    pub fn operation_count(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count the call and fail it when the store is marked unavailable.
    fn begin(&self, operation: &'static str) -> StoreResult<()> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!(
                "memory store is offline ({operation})"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn read_movie(&self, id: DbId) -> StoreResult<Option<Movie>> {
        self.begin("read_movie")?;
        Ok(self.read().movies.get(&id).cloned())
    }

    async fn list_movies(&self, showing_only: bool) -> StoreResult<Vec<Movie>> {
        self.begin("list_movies")?;
        Ok(self
            .read()
            .movies
            .values()
            .filter(|movie| !showing_only || movie.is_showing)
            .cloned()
            .collect())
    }

    async fn read_review(&self, id: DbId) -> StoreResult<Option<Review>> {
        self.begin("read_review")?;
        Ok(self.read().reviews.get(&id).cloned())
    }

    async fn list_reviews_for_movie(&self, movie_id: DbId) -> StoreResult<Vec<ReviewCriticRow>> {
        self.begin("list_reviews_for_movie")?;
        let catalog = self.read();

        // Inner-join semantics: reviews whose critic is missing are dropped.
        let rows = catalog
            .reviews
            .values()
            .filter(|review| review.movie_id == movie_id)
            .filter_map(|review| {
                let critic = catalog.critics.get(&review.critic_id)?;
                Some(ReviewCriticRow {
                    review_id: review.review_id,
                    content: review.content.clone(),
                    score: review.score,
                    critic_id: review.critic_id,
                    movie_id: review.movie_id,
                    created_at: review.created_at,
                    updated_at: review.updated_at,
                    preferred_name: critic.preferred_name.clone(),
                    surname: critic.surname.clone(),
                    organization_name: critic.organization_name.clone(),
                    critic_created_at: critic.created_at,
                    critic_updated_at: critic.updated_at,
                })
            })
            .collect();

        Ok(rows)
    }

    async fn update_review(&self, review: &Review) -> StoreResult<Review> {
        self.begin("update_review")?;
        let mut catalog = self.write();

        let stored = catalog
            .reviews
            .get_mut(&review.review_id)
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))?;
        stored.content = review.content.clone();
        stored.score = review.score;
        stored.updated_at = chrono::Utc::now();

        Ok(stored.clone())
    }

    async fn delete_review(&self, id: DbId) -> StoreResult<()> {
        self.begin("delete_review")?;
        self.write().reviews.remove(&id);
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.begin("health_check")
    }
}
