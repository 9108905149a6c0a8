use crate::domain::article::{ArticleId, ArticleTagRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::taxonomy::{Tag, TagId};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleTagRepository {
    pool: PgPool,
}

impl PostgresArticleTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
    slug: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: row.name,
            slug: row.slug,
        })
    }
}

#[async_trait]
impl ArticleTagRepository for PostgresArticleTagRepository {
    async fn add_tag(&self, article_id: ArticleId, tag_id: TagId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO article_tags (article_id, tag_id) VALUES ($1, $2)
             ON CONFLICT (article_id, tag_id) DO NOTHING",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(tag_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn remove_tag(&self, article_id: ArticleId, tag_id: TagId) -> DomainResult<()> {
        sqlx::query("DELETE FROM article_tags WHERE article_id = $1 AND tag_id = $2")
            .bind(i64::from(article_id))
            .bind(i64::from(tag_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn list_tags(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT t.id, t.name, t.slug
             FROM tags t
             JOIN article_tags art ON art.tag_id = t.id
             WHERE art.article_id = $1
             ORDER BY t.name, t.id",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }
}
