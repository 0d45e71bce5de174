//! Route table: the /api surface, service routes, and the 404 fallback.

use crate::error::ErrorBody;
use crate::handlers::{api, articles, comments, topics, users};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use tower_http::limit::RequestBodyLimitLayer;

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api", get(api::serve_catalog))
        .route("/api/topics", get(topics::list))
        .route("/api/articles", get(articles::list))
        .route(
            "/api/articles/:article_id",
            get(articles::read).patch(articles::update_votes),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(comments::list_for_article).post(comments::create),
        )
        .route("/api/comments/:comment_id", delete(comments::delete))
        .route("/api/users", get(users::list))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if sqlx::query("SELECT 1").fetch_optional(&state.pool).await.is_err() {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}

/// Service routes: GET /health (no store access), GET /ready (pings the pool).
pub fn service_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}

async fn route_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            msg: "Route not found".into(),
        }),
    )
}

/// The whole application: api + service routes, generic 404 for everything
/// else, body size cap on the way in.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(api_routes(state.clone()))
        .merge(service_routes(state))
        .fallback(route_not_found)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
}
