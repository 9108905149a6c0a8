use crate::domain::article::{Article, ArticleRevision, ArticleStatus};
use crate::domain::taxonomy::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub body: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub author_id: i64,
    pub category_id: i64,
    #[schema(value_type = String, example = "published")]
    pub status: ArticleStatus,
    pub view_count: i64,
    pub featured: bool,
    #[serde(default, with = "serde_time::option")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            summary: article.summary,
            body: article.body.into_inner(),
            featured_image: article.featured_image,
            author_id: article.author_id.into(),
            category_id: article.category_id.into(),
            status: article.status,
            view_count: article.view_count,
            featured: article.featured,
            scheduled_at: article.scheduled_at,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleRevisionDto {
    pub id: i64,
    pub article_id: i64,
    pub title: String,
    pub body: String,
    pub editor_id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<ArticleRevision> for ArticleRevisionDto {
    fn from(revision: ArticleRevision) -> Self {
        Self {
            id: revision.id,
            article_id: revision.article_id.into(),
            title: revision.title.into_inner(),
            body: revision.body.into_inner(),
            editor_id: revision.editor_id.into(),
            created_at: revision.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name,
            slug: tag.slug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ViewRecordedDto {
    pub counted: bool,
}
