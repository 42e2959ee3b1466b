pub mod health;
pub mod movies;
pub mod reviews;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                                   list (?is_showing=)
/// /movies/{movie_id}                        read
/// /movies/{movie_id}/reviews                list reviews with critics
/// /movies/{movie_id}/reviews/{review_id}    always 405 (review ops are not movie-scoped)
///
/// /reviews                                  always 405 (listing needs a movie)
/// /reviews/{review_id}                      read, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Movies (also nests the movie-scoped review routes).
        .nest("/movies", movies::router())
        // Reviews addressed by review id alone.
        .nest("/reviews", reviews::router())
}
