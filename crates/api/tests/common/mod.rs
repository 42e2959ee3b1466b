#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use marquee_api::config::ServerConfig;
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_db::models::critic::Critic;
use marquee_db::models::movie::Movie;
use marquee_db::models::review::Review;
use marquee_db::MemoryStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: MemoryStore) -> Router {
    let config = test_config();
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A catalog with:
/// - movie 1 (showing) and movie 2 (not showing)
/// - critics 1 and 2
/// - reviews 1 and 2 on movie 1, review 3 on movie 2, review 7 on movie 2
pub fn seeded_store() -> MemoryStore {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
    let critic_at = Utc.with_ymd_and_hms(2021, 2, 3, 4, 5, 6).unwrap();
    let store = MemoryStore::new();

    store.insert_movie(movie(1, "Spirited Away", true));
    store.insert_movie(movie(2, "Heat", false));

    for (critic_id, preferred_name, surname, organization_name) in [
        (1, "Chana", "Gibson", "Film Frenzy"),
        (2, "Blaise", "Okafor", "The Reel Review"),
    ] {
        store.insert_critic(Critic {
            critic_id,
            preferred_name: preferred_name.to_string(),
            surname: surname.to_string(),
            organization_name: organization_name.to_string(),
            created_at: critic_at,
            updated_at: critic_at,
        });
    }

    for (review_id, content, score, critic_id, movie_id) in [
        (1, "Luminous and strange.", 5, 1, 1),
        (2, "Beautiful, if slow in the middle.", 4, 2, 1),
        (3, "Tight and relentless.", 4, 1, 2),
        (7, "A", 3, 2, 2),
    ] {
        store.insert_review(Review {
            review_id,
            content: content.to_string(),
            score,
            critic_id,
            movie_id,
            created_at: at,
            updated_at: at,
        });
    }

    store
}

pub fn movie(movie_id: i64, title: &str, is_showing: bool) -> Movie {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Movie {
        movie_id,
        title: title.to_string(),
        runtime_in_minutes: Some(120),
        rating: Some("PG-13".to_string()),
        description: Some(format!("About {title}.")),
        image_url: None,
        is_showing,
        created_at: at,
        updated_at: at,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
