// src/infrastructure/repositories/articles/revision.rs
use crate::domain::article::{
    ArticleBody, ArticleId, ArticleRevision, ArticleRevisionRepository, ArticleTitle,
    NewArticleRevision,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleRevisionRepository {
    pool: PgPool,
}

impl PostgresArticleRevisionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRevisionRow {
    id: i64,
    article_id: i64,
    title: String,
    body: String,
    editor_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRevisionRow> for ArticleRevision {
    type Error = DomainError;

    fn try_from(row: ArticleRevisionRow) -> Result<Self, Self::Error> {
        Ok(ArticleRevision {
            id: row.id,
            article_id: ArticleId::new(row.article_id)?,
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            editor_id: UserId::new(row.editor_id)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ArticleRevisionRepository for PostgresArticleRevisionRepository {
    async fn append(&self, revision: NewArticleRevision) -> DomainResult<ArticleRevision> {
        let row = sqlx::query_as::<_, ArticleRevisionRow>(
            r#"
            INSERT INTO article_revisions (article_id, title, body, editor_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, article_id, title, body, editor_id, created_at
            "#,
        )
        .bind(i64::from(revision.article_id))
        .bind(revision.title.as_str())
        .bind(revision.body.as_str())
        .bind(i64::from(revision.editor_id))
        .bind(revision.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ArticleRevision::try_from(row)
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleRevision>> {
        let rows = sqlx::query_as::<_, ArticleRevisionRow>(
            r#"
            SELECT id, article_id, title, body, editor_id, created_at
            FROM article_revisions
            WHERE article_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(ArticleRevision::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}
