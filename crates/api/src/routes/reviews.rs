//! Route definitions for reviews.

use axum::routing::get;
use axum::Router;

use crate::handlers::reviews;
use crate::middleware::path_shape::reject_method;
use crate::state::AppState;

/// Review routes, mounted both at `/reviews` and `/movies/{movie_id}/reviews`.
///
/// ```text
/// GET    /              -> list      (405 unless mounted under a movie)
/// GET    /{review_id}   -> read      (405 when mounted under a movie)
/// PUT    /{review_id}   -> update    (405 when mounted under a movie)
/// DELETE /{review_id}   -> destroy   (405 when mounted under a movie)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reviews::list).fallback(reject_method))
        .route(
            "/{review_id}",
            get(reviews::read)
                .put(reviews::update)
                .delete(reviews::destroy)
                .fallback(reject_method),
        )
}
