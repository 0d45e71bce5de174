//! User queries. Only `username` is contractual; profile fields ride along.

use crate::error::ApiError;
use crate::models::User;
use sqlx::PgPool;

pub async fn select_users(pool: &PgPool) -> Result<Vec<User>, ApiError> {
    let users = sqlx::query_as("SELECT username, name, avatar_url FROM users")
        .fetch_all(pool)
        .await?;
    Ok(users)
}

pub async fn user_exists(pool: &PgPool, username: &str) -> Result<bool, ApiError> {
    let row: Option<(String,)> = sqlx::query_as("SELECT username FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}
