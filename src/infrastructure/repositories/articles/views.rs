use crate::domain::article::{ArticleView, ArticleViewLogRepository};
use crate::domain::errors::DomainResult;
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Append-only dedup ledger backed by `article_views`.
#[derive(Clone)]
pub struct PostgresArticleViewLogRepository {
    pool: PgPool,
}

impl PostgresArticleViewLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleViewLogRepository for PostgresArticleViewLogRepository {
    async fn seen_since(&self, view: &ArticleView, since: DateTime<Utc>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM article_views
                 WHERE article_id = $1 AND client_ip = $2 AND user_agent = $3
                   AND viewed_at > $4
             )",
        )
        .bind(i64::from(view.article_id))
        .bind(view.client_ip.as_str())
        .bind(view.user_agent.as_str())
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn append(&self, view: &ArticleView) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO article_views (article_id, client_ip, user_agent, viewed_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(i64::from(view.article_id))
        .bind(view.client_ip.as_str())
        .bind(view.user_agent.as_str())
        .bind(view.viewed_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }
}
