//! Router-level tests for the validation, catalog, and fallback paths.
//!
//! The pool is created lazily and never connected: every request exercised
//! here is decided before any query is issued.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use newsdesk::{app, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn test_app() -> Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/newsdesk_test")
        .expect("lazy pool");
    app(AppState { pool }, 64 * 1024)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn api_catalog_names_the_endpoints() {
    let response = test_app().oneshot(get("/api")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body.get("GET /api/articles").is_some());
    assert!(body.get("DELETE /api/comments/:comment_id").is_some());
}

#[tokio::test]
async fn unknown_routes_get_the_generic_404() {
    let response = test_app().oneshot(get("/api/lolwhut")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["msg"], "Route not found");
}

#[tokio::test]
async fn disallowed_sort_by_is_a_400() {
    let response = test_app()
        .oneshot(get("/api/articles?sort_by=bananas"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["msg"].as_str().unwrap().starts_with("Invalid query"));
}

#[tokio::test]
async fn disallowed_order_is_a_400() {
    let response = test_app()
        .oneshot(get("/api/articles?order=sideways"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_article_id_is_a_400() {
    let response = test_app().oneshot(get("/api/articles/notanid")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["msg"].as_str().unwrap().contains("article id"));
}

#[tokio::test]
async fn non_numeric_id_on_comment_listing_is_a_400() {
    let response = test_app()
        .oneshot(get("/api/articles/xyz/comments"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vote_patch_with_non_numeric_id_is_a_400() {
    let response = test_app()
        .oneshot(json_request("PATCH", "/api/articles/one", r#"{"inc_votes": 1}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vote_patch_without_inc_votes_is_a_400() {
    let response = test_app()
        .oneshot(json_request("PATCH", "/api/articles/1", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["msg"].as_str().unwrap().contains("inc_votes"));
}

#[tokio::test]
async fn comment_post_without_username_is_a_400() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/articles/1/comments",
            r#"{"body": "first!"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_comment_id_on_delete_is_a_400() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/comments/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_does_not_touch_the_store() {
    let response = test_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
