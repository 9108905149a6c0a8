use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Immutable snapshot of an article's content. Revisions are append-only.
#[derive(Debug, Clone)]
pub struct ArticleRevision {
    pub id: i64,
    pub article_id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub editor_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticleRevision {
    pub article_id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub editor_id: UserId,
    pub created_at: DateTime<Utc>,
}
