//! Comment endpoints: listing per article, creation, deletion.

use crate::error::ApiError;
use crate::handlers::{parse_id, require_str_field};
use crate::queries;
use crate::response::{CommentBody, CommentsBody};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

pub async fn list_for_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CommentsBody>, ApiError> {
    let article_id = parse_id(&id, "article")?;
    let comments = queries::comments::select_comments_for_article(&state.pool, article_id).await?;
    Ok(Json(CommentsBody { comments }))
}

/// POST body: `{"username": ..., "body": ...}`.
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<CommentBody>, ApiError> {
    let article_id = parse_id(&id, "article")?;
    let username = require_str_field(&body, "username")?;
    let text = require_str_field(&body, "body")?;
    let comment = queries::comments::insert_comment(&state.pool, article_id, username, text).await?;
    Ok(Json(CommentBody { comment }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let comment_id = parse_id(&id, "comment")?;
    queries::comments::delete_comment(&state.pool, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
