//! Comment queries: listing per article, creation, deletion.

use crate::error::ApiError;
use crate::models::Comment;
use crate::queries::{articles, users};
use sqlx::PgPool;

const COMMENT_COLUMNS: &str = "comment_id, article_id, author, body, votes, created_at";

/// Comments for one article, newest first. An unknown article is
/// `ArticleNotFound`; a known article with no comments is an empty list.
pub async fn select_comments_for_article(
    pool: &PgPool,
    article_id: i32,
) -> Result<Vec<Comment>, ApiError> {
    if !articles::article_exists(pool, article_id).await? {
        return Err(ApiError::ArticleNotFound);
    }
    let sql = format!(
        "SELECT {} FROM comments WHERE article_id = $1 \
         ORDER BY created_at DESC, comment_id DESC",
        COMMENT_COLUMNS
    );
    let comments = sqlx::query_as(&sql).bind(article_id).fetch_all(pool).await?;
    Ok(comments)
}

/// Insert a comment for an existing article by an existing user. Both checks
/// run before the insert so a failed request writes nothing.
pub async fn insert_comment(
    pool: &PgPool,
    article_id: i32,
    username: &str,
    body: &str,
) -> Result<Comment, ApiError> {
    if !articles::article_exists(pool, article_id).await? {
        return Err(ApiError::ArticleNotFound);
    }
    if !users::user_exists(pool, username).await? {
        return Err(ApiError::UserNotFound);
    }
    tracing::debug!(article_id, username, "insert comment");
    let sql = format!(
        "INSERT INTO comments (article_id, author, body) VALUES ($1, $2, $3) RETURNING {}",
        COMMENT_COLUMNS
    );
    let comment = sqlx::query_as(&sql)
        .bind(article_id)
        .bind(username)
        .bind(body)
        .fetch_one(pool)
        .await?;
    Ok(comment)
}

pub async fn delete_comment(pool: &PgPool, comment_id: i32) -> Result<(), ApiError> {
    tracing::debug!(comment_id, "delete comment");
    let deleted: Option<(i32,)> =
        sqlx::query_as("DELETE FROM comments WHERE comment_id = $1 RETURNING comment_id")
            .bind(comment_id)
            .fetch_optional(pool)
            .await?;
    match deleted {
        Some(_) => Ok(()),
        None => Err(ApiError::CommentNotFound),
    }
}
