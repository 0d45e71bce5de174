//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Topic not found")]
    TopicNotFound,
    #[error("Article not found")]
    ArticleNotFound,
    #[error("Comment not found")]
    CommentNotFound,
    #[error("User not found")]
    UserNotFound,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::InvalidQuery(_) | ApiError::UserNotFound => {
                StatusCode::BAD_REQUEST
            }
            ApiError::TopicNotFound | ApiError::ArticleNotFound | ApiError::CommentNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            ApiError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Wire shape for every failure body.
#[derive(Serialize)]
pub struct ErrorBody {
    pub msg: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(ErrorBody { msg })).into_response()
    }
}
