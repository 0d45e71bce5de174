//! `GET /api`: machine-readable catalog of every endpoint this service serves.

use axum::Json;
use serde_json::{json, Value};

pub fn catalog() -> Value {
    json!({
        "GET /api": {
            "description": "this catalog"
        },
        "GET /api/topics": {
            "description": "all topics",
            "example_response": { "topics": [{ "slug": "coding", "description": "Code is love, code is life" }] }
        },
        "GET /api/articles": {
            "description": "all articles with their comment counts",
            "queries": {
                "sort_by": ["created_at", "title", "votes", "author", "article_id", "topic"],
                "order": ["asc", "desc"],
                "topic": "filter by topic slug"
            },
            "example_response": { "articles": [] }
        },
        "GET /api/articles/:article_id": {
            "description": "one article with its comment count"
        },
        "PATCH /api/articles/:article_id": {
            "description": "apply a signed delta to an article's votes",
            "example_request": { "inc_votes": 1 }
        },
        "GET /api/articles/:article_id/comments": {
            "description": "all comments for an article, newest first"
        },
        "POST /api/articles/:article_id/comments": {
            "description": "add a comment to an article",
            "example_request": { "username": "butter_bridge", "body": "Nice article" }
        },
        "DELETE /api/comments/:comment_id": {
            "description": "delete a comment by id"
        },
        "GET /api/users": {
            "description": "all users"
        }
    })
}

pub async fn serve_catalog() -> Json<Value> {
    Json(catalog())
}
