//! Article endpoints: listing with sort/filter, retrieval by id, vote patch.

use crate::error::ApiError;
use crate::handlers::{parse_id, require_int_field};
use crate::queries::{self, SortBy, SortOrder};
use crate::response::{ArticleBody, ArticlesBody};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub struct ArticlesQuery {
    sort_by: Option<String>,
    order: Option<String>,
    topic: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ArticlesQuery>,
) -> Result<Json<ArticlesBody>, ApiError> {
    let sort_by = match params.sort_by.as_deref() {
        Some(s) => SortBy::parse(s)?,
        None => SortBy::default(),
    };
    let order = match params.order.as_deref() {
        Some(s) => SortOrder::parse(s)?,
        None => SortOrder::default(),
    };
    let articles =
        queries::articles::select_articles(&state.pool, params.topic.as_deref(), sort_by, order)
            .await?;
    Ok(Json(ArticlesBody { articles }))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let article_id = parse_id(&id, "article")?;
    let article = queries::articles::select_article_by_id(&state.pool, article_id).await?;
    Ok(Json(ArticleBody { article }))
}

/// PATCH body: `{"inc_votes": n}`. The updated row comes back without
/// `comment_count`.
pub async fn update_votes(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let article_id = parse_id(&id, "article")?;
    let inc_votes = require_int_field(&body, "inc_votes")?;
    let article = queries::articles::update_article_votes(&state.pool, article_id, inc_votes).await?;
    Ok(Json(ArticleBody { article }))
}
