//! Article queries: listing with sort/filter, retrieval, vote updates.
//!
//! Sort vocabularies are enumerated types mapped to fixed column references;
//! user input never reaches the SQL text, only the bind parameters.

use crate::error::ApiError;
use crate::models::{Article, ArticleWithCommentCount};
use crate::queries::topics;
use sqlx::PgPool;

/// Columns of the `articles` table, aliased for the aggregation join.
const ARTICLE_COLUMNS: &str = "a.article_id, a.title, a.topic, a.author, a.body, a.created_at, a.votes";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    CreatedAt,
    Title,
    Votes,
    Author,
    ArticleId,
    Topic,
}

impl SortBy {
    pub fn parse(s: &str) -> Result<Self, ApiError> {
        match s {
            "created_at" => Ok(SortBy::CreatedAt),
            "title" => Ok(SortBy::Title),
            "votes" => Ok(SortBy::Votes),
            "author" => Ok(SortBy::Author),
            "article_id" => Ok(SortBy::ArticleId),
            "topic" => Ok(SortBy::Topic),
            other => Err(ApiError::InvalidQuery(format!(
                "cannot sort articles by '{}'",
                other
            ))),
        }
    }

    fn column(self) -> &'static str {
        match self {
            SortBy::CreatedAt => "a.created_at",
            SortBy::Title => "a.title",
            SortBy::Votes => "a.votes",
            SortBy::Author => "a.author",
            SortBy::ArticleId => "a.article_id",
            SortBy::Topic => "a.topic",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Result<Self, ApiError> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(ApiError::InvalidQuery(format!(
                "order must be 'asc' or 'desc', got '{}'",
                other
            ))),
        }
    }

    fn sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// ORDER BY the requested column, with `article_id` as the deterministic
/// tiebreak when it is not already the sort key.
fn order_clause(sort_by: SortBy, order: SortOrder) -> String {
    let mut clause = format!("ORDER BY {} {}", sort_by.column(), order.sql());
    if sort_by != SortBy::ArticleId {
        clause.push_str(", a.article_id ASC");
    }
    clause
}

/// Every article appears exactly once; zero-comment articles count 0.
fn list_sql(filter_by_topic: bool, sort_by: SortBy, order: SortOrder) -> String {
    let where_clause = if filter_by_topic {
        " WHERE a.topic = $1"
    } else {
        ""
    };
    format!(
        "SELECT {}, COUNT(c.comment_id) AS comment_count \
         FROM articles a \
         LEFT JOIN comments c ON c.article_id = a.article_id\
         {} \
         GROUP BY a.article_id \
         {}",
        ARTICLE_COLUMNS,
        where_clause,
        order_clause(sort_by, order)
    )
}

/// List articles with the live comment count. An unknown topic slug is a
/// `TopicNotFound` failure; a known slug with no articles is an empty list.
pub async fn select_articles(
    pool: &PgPool,
    topic: Option<&str>,
    sort_by: SortBy,
    order: SortOrder,
) -> Result<Vec<ArticleWithCommentCount>, ApiError> {
    let sql = list_sql(topic.is_some(), sort_by, order);
    tracing::debug!(sql = %sql, topic = ?topic, "query");
    let rows: Vec<ArticleWithCommentCount> = match topic {
        Some(slug) => sqlx::query_as(&sql).bind(slug).fetch_all(pool).await?,
        None => sqlx::query_as(&sql).fetch_all(pool).await?,
    };
    if rows.is_empty() {
        if let Some(slug) = topic {
            if !topics::topic_exists(pool, slug).await? {
                return Err(ApiError::TopicNotFound);
            }
        }
    }
    Ok(rows)
}

pub async fn select_article_by_id(
    pool: &PgPool,
    article_id: i32,
) -> Result<ArticleWithCommentCount, ApiError> {
    let sql = format!(
        "SELECT {}, COUNT(c.comment_id) AS comment_count \
         FROM articles a \
         LEFT JOIN comments c ON c.article_id = a.article_id \
         WHERE a.article_id = $1 \
         GROUP BY a.article_id",
        ARTICLE_COLUMNS
    );
    sqlx::query_as(&sql)
        .bind(article_id)
        .fetch_optional(pool)
        .await?
        .ok_or(ApiError::ArticleNotFound)
}

/// Applies the delta in a single UPDATE..RETURNING so concurrent updates never
/// lose increments. No floor: votes may go negative.
pub async fn update_article_votes(
    pool: &PgPool,
    article_id: i32,
    inc_votes: i32,
) -> Result<Article, ApiError> {
    tracing::debug!(article_id, inc_votes, "update votes");
    sqlx::query_as(
        "UPDATE articles SET votes = votes + $1 WHERE article_id = $2 \
         RETURNING article_id, title, topic, author, body, created_at, votes",
    )
    .bind(inc_votes)
    .bind(article_id)
    .fetch_optional(pool)
    .await?
    .ok_or(ApiError::ArticleNotFound)
}

pub async fn article_exists(pool: &PgPool, article_id: i32) -> Result<bool, ApiError> {
    let row: Option<(i32,)> = sqlx::query_as("SELECT article_id FROM articles WHERE article_id = $1")
        .bind(article_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_by_accepts_the_allow_list() {
        assert_eq!(SortBy::parse("created_at").unwrap(), SortBy::CreatedAt);
        assert_eq!(SortBy::parse("title").unwrap(), SortBy::Title);
        assert_eq!(SortBy::parse("votes").unwrap(), SortBy::Votes);
        assert_eq!(SortBy::parse("author").unwrap(), SortBy::Author);
        assert_eq!(SortBy::parse("article_id").unwrap(), SortBy::ArticleId);
        assert_eq!(SortBy::parse("topic").unwrap(), SortBy::Topic);
    }

    #[test]
    fn sort_by_rejects_anything_else() {
        let err = SortBy::parse("body").unwrap_err();
        assert!(matches!(err, ApiError::InvalidQuery(_)));
        assert!(matches!(
            SortBy::parse("votes; DROP TABLE articles"),
            Err(ApiError::InvalidQuery(_))
        ));
    }

    #[test]
    fn order_rejects_anything_but_asc_desc() {
        assert_eq!(SortOrder::parse("asc").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::parse("desc").unwrap(), SortOrder::Desc);
        assert!(matches!(
            SortOrder::parse("sideways"),
            Err(ApiError::InvalidQuery(_))
        ));
        // case-sensitive, like the rest of the vocabulary
        assert!(SortOrder::parse("DESC").is_err());
    }

    #[test]
    fn defaults_are_created_at_descending() {
        assert_eq!(SortBy::default(), SortBy::CreatedAt);
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }

    #[test]
    fn order_clause_breaks_ties_by_article_id() {
        assert_eq!(
            order_clause(SortBy::Votes, SortOrder::Asc),
            "ORDER BY a.votes ASC, a.article_id ASC"
        );
        assert_eq!(
            order_clause(SortBy::ArticleId, SortOrder::Desc),
            "ORDER BY a.article_id DESC"
        );
    }

    #[test]
    fn list_sql_joins_and_groups_once_per_article() {
        let sql = list_sql(false, SortBy::default(), SortOrder::default());
        assert!(sql.contains("LEFT JOIN comments c ON c.article_id = a.article_id"));
        assert!(sql.contains("COUNT(c.comment_id) AS comment_count"));
        assert!(sql.contains("GROUP BY a.article_id"));
        assert!(sql.contains("ORDER BY a.created_at DESC, a.article_id ASC"));
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn list_sql_filters_by_bind_parameter_only() {
        let sql = list_sql(true, SortBy::Topic, SortOrder::Asc);
        assert!(sql.contains("WHERE a.topic = $1"));
        assert!(sql.contains("ORDER BY a.topic ASC, a.article_id ASC"));
    }
}
