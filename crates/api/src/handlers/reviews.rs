//! Handlers for reviews, served at `/reviews` and `/movies/{movie_id}/reviews`.
//!
//! Listing is only reachable under a movie; reading, updating and deleting a
//! single review only by review id. The path-shape guards enforce both.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::{parse_id, Entity};
use marquee_db::models::review::{Review, ReviewPatch, ReviewProjection};
use marquee_db::CatalogStore;

use crate::error::{AppError, AppResult};
use crate::middleware::boundary::boundary;
use crate::middleware::context::RequestContext;
use crate::middleware::path_shape::{has_movie_id_in_path, no_movie_id_in_path};
use crate::response::{DataRequest, DataResponse};
use crate::state::AppState;

/// Body accepted by `PUT /reviews/{review_id}`, kept unparsed until the
/// update step so guards run first. A missing or `null` `data` is an empty
/// patch.
type UpdateBody = Result<Json<DataRequest<Option<ReviewPatch>>>, JsonRejection>;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// Existence guard: resolve the path's `review_id` or fail with NotFound.
pub async fn review_exists(
    store: &dyn CatalogStore,
    ctx: RequestContext,
) -> AppResult<RequestContext<Review>> {
    let raw = ctx.params().review_id.clone().unwrap_or_default();

    let review = match parse_id(&raw) {
        Some(id) => store.read_review(id).await?,
        None => None,
    };

    match review {
        Some(review) => Ok(ctx.resolve(review)),
        None => Err(CoreError::not_found(Entity::Review, raw).into()),
    }
}

/// Load the reviews of the path's movie, each shaped into a
/// [`ReviewProjection`] with its critic nested.
///
/// A movie id that cannot be a key matches no rows.
pub async fn list_reviews<R>(
    store: &dyn CatalogStore,
    ctx: &RequestContext<R>,
) -> AppResult<Json<DataResponse<Vec<ReviewProjection>>>> {
    let Some(movie_id) = ctx.params().movie_id.as_deref().and_then(parse_id) else {
        return Ok(Json(DataResponse { data: Vec::new() }));
    };

    let rows = store.list_reviews_for_movie(movie_id).await?;
    let data = rows.into_iter().map(ReviewProjection::from).collect();
    Ok(Json(DataResponse { data }))
}

/// Respond with the review resolved by [`review_exists`].
pub fn read_review(ctx: RequestContext<Review>) -> Json<DataResponse<Review>> {
    Json(DataResponse {
        data: ctx.into_resolved(),
    })
}

/// Merge the payload over the resolved review and persist it.
///
/// The stored identity always wins over any `review_id` in the payload.
pub async fn update_review(
    store: &dyn CatalogStore,
    ctx: RequestContext<Review>,
    body: UpdateBody,
) -> AppResult<Json<DataResponse<Review>>> {
    let Json(DataRequest { data: patch }) =
        body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let patch = patch.unwrap_or_default();
    patch.validate()?;

    let merged = ctx.resolved().merged(patch);
    let updated = store.update_review(&merged).await?;

    tracing::info!(review_id = updated.review_id, "Review updated");
    Ok(Json(DataResponse { data: updated }))
}

/// Hard-delete the resolved review.
pub async fn destroy_review(
    store: &dyn CatalogStore,
    ctx: RequestContext<Review>,
) -> AppResult<StatusCode> {
    let review_id = ctx.resolved().review_id;
    store.delete_review(review_id).await?;

    tracing::info!(review_id, "Review deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Route chains
// ---------------------------------------------------------------------------

/// GET /movies/{movie_id}/reviews
///
/// Chain: `[has_movie_id_in_path, boundary(list_reviews)]`.
pub async fn list(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> AppResult<impl IntoResponse> {
    let ctx = has_movie_id_in_path(ctx)?;
    boundary("list_reviews", list_reviews(state.store.as_ref(), &ctx)).await
}

/// GET /reviews/{review_id}
///
/// Chain: `[no_movie_id_in_path, boundary(review_exists), read_review]`.
pub async fn read(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> AppResult<impl IntoResponse> {
    let ctx = no_movie_id_in_path(ctx)?;
    let ctx = boundary("review_exists", review_exists(state.store.as_ref(), ctx)).await?;
    Ok(read_review(ctx))
}

/// PUT /reviews/{review_id}
///
/// Chain: `[no_movie_id_in_path, boundary(review_exists), boundary(update_review)]`.
pub async fn update(
    State(state): State<AppState>,
    ctx: RequestContext,
    body: UpdateBody,
) -> AppResult<impl IntoResponse> {
    let ctx = no_movie_id_in_path(ctx)?;
    let ctx = boundary("review_exists", review_exists(state.store.as_ref(), ctx)).await?;
    boundary("update_review", update_review(state.store.as_ref(), ctx, body)).await
}

/// DELETE /reviews/{review_id}
///
/// Chain: `[no_movie_id_in_path, boundary(review_exists), boundary(destroy_review)]`.
pub async fn destroy(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> AppResult<impl IntoResponse> {
    let ctx = no_movie_id_in_path(ctx)?;
    let ctx = boundary("review_exists", review_exists(state.store.as_ref(), ctx)).await?;
    boundary("destroy_review", destroy_review(state.store.as_ref(), ctx)).await
}
