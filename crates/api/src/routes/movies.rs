//! Route definitions for the `/movies` resource.
//!
//! Also nests the review routes under `/movies/{movie_id}/reviews`.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::middleware::path_shape::reject_method;
use crate::state::AppState;

use super::reviews;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                            -> list
/// GET    /{movie_id}                  -> read
/// *      /{movie_id}/reviews/...      -> review routes (see `reviews::router`)
/// ```
///
/// Any other method on these paths gets a 405.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list).fallback(reject_method))
        .route("/{movie_id}", get(movies::read).fallback(reject_method))
        .nest("/{movie_id}/reviews", reviews::router())
}
