//! Handlers for the `/movies` resource.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::showing::showing_only;
use marquee_core::types::{parse_id, Entity};
use marquee_db::models::movie::Movie;
use marquee_db::CatalogStore;

use crate::error::AppResult;
use crate::middleware::boundary::boundary;
use crate::middleware::context::RequestContext;
use crate::query::ShowingParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// Existence guard: resolve the path's `movie_id` or fail with NotFound.
pub async fn movie_exists(
    store: &dyn CatalogStore,
    ctx: RequestContext,
) -> AppResult<RequestContext<Movie>> {
    let raw = ctx.params().movie_id.clone().unwrap_or_default();

    let movie = match parse_id(&raw) {
        Some(id) => store.read_movie(id).await?,
        None => None,
    };

    match movie {
        Some(movie) => Ok(ctx.resolve(movie)),
        None => Err(CoreError::not_found(Entity::Movie, raw).into()),
    }
}

/// Respond with the movie resolved by [`movie_exists`].
pub fn read_movie(ctx: RequestContext<Movie>) -> Json<DataResponse<Movie>> {
    Json(DataResponse {
        data: ctx.into_resolved(),
    })
}

/// Load all movies, or only those showing when `showing_only` is set.
pub async fn list_movies(
    store: &dyn CatalogStore,
    showing_only: bool,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = store.list_movies(showing_only).await?;
    Ok(Json(DataResponse { data: movies }))
}

// ---------------------------------------------------------------------------
// Route chains
// ---------------------------------------------------------------------------

/// GET /movies?is_showing=
///
/// Chain: `[boundary(list_movies)]`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ShowingParams>,
) -> AppResult<impl IntoResponse> {
    let filter = showing_only(params.is_showing.as_deref());
    boundary("list_movies", list_movies(state.store.as_ref(), filter)).await
}

/// GET /movies/{movie_id}
///
/// Chain: `[boundary(movie_exists), read_movie]`.
pub async fn read(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> AppResult<impl IntoResponse> {
    let ctx = boundary("movie_exists", movie_exists(state.store.as_ref(), ctx)).await?;
    Ok(read_movie(ctx))
}
