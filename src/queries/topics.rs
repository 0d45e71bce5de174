//! Topic queries. Topics are immutable reference data.

use crate::error::ApiError;
use crate::models::Topic;
use sqlx::PgPool;

pub async fn select_topics(pool: &PgPool) -> Result<Vec<Topic>, ApiError> {
    let topics = sqlx::query_as("SELECT slug, description FROM topics")
        .fetch_all(pool)
        .await?;
    Ok(topics)
}

pub async fn topic_exists(pool: &PgPool, slug: &str) -> Result<bool, ApiError> {
    let row: Option<(String,)> = sqlx::query_as("SELECT slug FROM topics WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}
