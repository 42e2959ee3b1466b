//! HTTP-level integration tests for the review endpoints.
//!
//! Covers the movie-scoped listing, the review-scoped update/delete chains,
//! and the path-shape rules that keep each operation on its own side.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_bytes, body_json, build_test_app, delete, get, put_json, seeded_store, send};
use serde_json::json;

// ---------------------------------------------------------------------------
// GET /movies/{movie_id}/reviews
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_reviews_with_nested_critic() {
    let response = get(build_test_app(seeded_store()), "/movies/1/reviews").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let reviews = json["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);

    let first = &reviews[0];
    assert_eq!(first["review_id"], 1);
    assert_eq!(first["movie_id"], 1);
    assert_eq!(first["content"], "Luminous and strange.");
    assert_eq!(first["critic"]["preferred_name"], "Chana");
    assert_eq!(first["critic"]["surname"], "Gibson");
    assert_eq!(first["critic"]["organization_name"], "Film Frenzy");
    assert_eq!(first["critic"]["created_at"], "2021-02-03T04:05:06Z");
}

#[tokio::test]
async fn every_listed_critic_matches_its_review() {
    for movie_id in [1, 2] {
        let response = get(
            build_test_app(seeded_store()),
            &format!("/movies/{movie_id}/reviews"),
        )
        .await;

        let json = body_json(response).await;
        for review in json["data"].as_array().unwrap() {
            assert_eq!(review["critic"]["critic_id"], review["critic_id"]);
        }
    }
}

#[tokio::test]
async fn list_for_movie_without_reviews_is_empty() {
    let response = get(build_test_app(seeded_store()), "/movies/404/reviews").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"data": []}));
}

#[tokio::test]
async fn list_without_movie_id_returns_405() {
    let store = seeded_store();

    let response = get(build_test_app(store.clone()), "/reviews").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "METHOD_NOT_ALLOWED");
    assert_eq!(json["error"], "GET not allowed for /reviews");
    assert_eq!(store.operation_count(), 0);
}

// ---------------------------------------------------------------------------
// PUT /reviews/{review_id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_merges_payload_over_existing_review() {
    let store = seeded_store();

    let response = put_json(
        build_test_app(store.clone()),
        "/reviews/7",
        json!({"data": {"content": "B"}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["review_id"], 7);
    assert_eq!(json["data"]["content"], "B");
    assert_eq!(json["data"]["score"], 3);

    // The persisted row matches the response.
    let read = body_json(get(build_test_app(store), "/reviews/7").await).await;
    assert_eq!(read["data"]["content"], "B");
    assert_eq!(read["data"]["score"], 3);
}

#[tokio::test]
async fn update_ignores_review_id_in_payload() {
    let store = seeded_store();

    let response = put_json(
        build_test_app(store.clone()),
        "/reviews/7",
        json!({"data": {"review_id": 1, "content": "B"}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["review_id"], 7);

    // Review 1 is untouched.
    let other = body_json(get(build_test_app(store), "/reviews/1").await).await;
    assert_eq!(other["data"]["content"], "Luminous and strange.");
}

#[tokio::test]
async fn update_ignores_string_review_id_in_payload() {
    let store = seeded_store();

    let response = put_json(
        build_test_app(store.clone()),
        "/reviews/7",
        json!({"data": {"review_id": "1", "content": "B"}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["review_id"], 7);
    assert_eq!(json["data"]["content"], "B");

    let other = body_json(get(build_test_app(store), "/reviews/1").await).await;
    assert_eq!(other["data"]["content"], "Luminous and strange.");
}

#[tokio::test]
async fn update_with_null_data_leaves_review_unchanged() {
    let response = put_json(
        build_test_app(seeded_store()),
        "/reviews/7",
        json!({"data": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["review_id"], 7);
    assert_eq!(json["data"]["content"], "A");
    assert_eq!(json["data"]["score"], 3);
}

#[tokio::test]
async fn update_missing_review_returns_404() {
    let response = put_json(
        build_test_app(seeded_store()),
        "/reviews/999",
        json!({"data": {"content": "B"}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Review cannot be found.");
}

#[tokio::test]
async fn update_under_movie_path_returns_405_without_store_access() {
    let store = seeded_store();

    let response = put_json(
        build_test_app(store.clone()),
        "/movies/2/reviews/7",
        json!({"data": {"content": "B"}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "PUT not allowed for /movies/2/reviews/7");
    assert_eq!(store.operation_count(), 0);
}

#[tokio::test]
async fn update_with_out_of_range_score_returns_400() {
    let store = seeded_store();

    let response = put_json(
        build_test_app(store.clone()),
        "/reviews/7",
        json!({"data": {"score": 11}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let read = body_json(get(build_test_app(store), "/reviews/7").await).await;
    assert_eq!(read["data"]["score"], 3);
}

#[tokio::test]
async fn update_with_malformed_body_returns_400() {
    let response = send(
        build_test_app(seeded_store()),
        Method::PUT,
        "/reviews/7",
        Some(json!({"data": {"score": "high"}})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn update_without_data_key_leaves_review_unchanged() {
    let response = put_json(build_test_app(seeded_store()), "/reviews/7", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["content"], "A");
    assert_eq!(json["data"]["score"], 3);
}

// ---------------------------------------------------------------------------
// DELETE /reviews/{review_id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_returns_204_and_review_is_gone() {
    let store = seeded_store();

    let response = delete(build_test_app(store.clone()), "/reviews/7").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = get(build_test_app(store.clone()), "/reviews/7").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Review cannot be found.");

    let listed = body_json(get(build_test_app(store), "/movies/2/reviews").await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_missing_review_returns_404() {
    let response = delete(build_test_app(seeded_store()), "/reviews/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Review cannot be found.");
}

#[tokio::test]
async fn delete_under_movie_path_returns_405_without_store_access() {
    let store = seeded_store();

    let response = delete(build_test_app(store.clone()), "/movies/1/reviews/1").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(store.operation_count(), 0);

    // Still there.
    let response = get(build_test_app(store), "/reviews/1").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn delete_when_store_is_down_returns_500() {
    let store = seeded_store();
    store.set_unavailable(true);

    let response = delete(build_test_app(store), "/reviews/1").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Unsupported methods
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_on_review_routes_returns_405() {
    for uri in ["/reviews", "/reviews/1", "/movies/1/reviews"] {
        let response = send(
            build_test_app(seeded_store()),
            Method::POST,
            uri,
            Some(json!({"data": {}})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "POST {uri}");
        let json = body_json(response).await;
        assert_eq!(json["error"], format!("POST not allowed for {uri}"));
    }
}
