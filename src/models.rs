//! Row types shared by the query layer and the response envelopes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Immutable reference data; `slug` is the key other tables point at.
#[derive(Clone, Debug, Serialize, FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, FromRow)]
pub struct User {
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

/// An article as stored. Vote mutations return this shape.
#[derive(Clone, Debug, Serialize, FromRow)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// An article augmented with the live comment count. The count is computed
/// per query by a left-join aggregation and never persisted.
#[derive(Clone, Debug, Serialize, FromRow)]
pub struct ArticleWithCommentCount {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

#[derive(Clone, Debug, Serialize, FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}
