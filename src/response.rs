//! Response envelopes. Each list endpoint wraps its rows under the key the
//! clients key on (`topics`, `articles`, ...), single-row endpoints likewise.

use crate::models::{ArticleWithCommentCount, Comment, Topic, User};
use serde::Serialize;

#[derive(Serialize)]
pub struct TopicsBody {
    pub topics: Vec<Topic>,
}

#[derive(Serialize)]
pub struct ArticlesBody {
    pub articles: Vec<ArticleWithCommentCount>,
}

/// Generic over the article shape: retrieval includes `comment_count`, the
/// vote patch returns the stored row only.
#[derive(Serialize)]
pub struct ArticleBody<T> {
    pub article: T,
}

#[derive(Serialize)]
pub struct UsersBody {
    pub users: Vec<User>,
}

#[derive(Serialize)]
pub struct CommentsBody {
    pub comments: Vec<Comment>,
}

#[derive(Serialize)]
pub struct CommentBody {
    pub comment: Comment,
}
