// src/infrastructure/repositories/articles/postgres.rs
use super::query::{self, ARTICLE_COLUMNS};
use crate::domain::article::{
    Article, ArticleBody, ArticleFilter, ArticleId, ArticlePage, ArticleReadRepository,
    ArticleSlug, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle, PageRequest,
    SortSpec, StatusChange,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::taxonomy::CategoryId;
use crate::domain::user::UserId;
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    summary: Option<String>,
    body: String,
    featured_image: Option<String>,
    author_id: i64,
    category_id: i64,
    status: String,
    view_count: i64,
    featured: bool,
    scheduled_at: Option<DateTime<Utc>>,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            summary: row.summary,
            body: ArticleBody::new(row.body)?,
            featured_image: row.featured_image,
            author_id: UserId::new(row.author_id)?,
            category_id: CategoryId::new(row.category_id)?,
            status: row.status.parse()?,
            view_count: row.view_count,
            featured: row.featured,
            scheduled_at: row.scheduled_at,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            summary,
            body,
            featured_image,
            author_id,
            category_id,
            featured,
            scheduled_at,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles AS a (title, slug, summary, body, featured_image, author_id,
                 category_id, featured, scheduled_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(summary)
        .bind(body.as_str())
        .bind(featured_image)
        .bind(i64::from(author_id))
        .bind(i64::from(category_id))
        .bind(featured)
        .bind(scheduled_at)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            summary,
            body,
            featured_image,
            category_id,
            featured,
            scheduled_at,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles AS a
             SET title = $1, slug = $2, summary = $3, body = $4, featured_image = $5,
                 category_id = $6, featured = $7, scheduled_at = $8, updated_at = $9
             WHERE a.id = $10
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(summary)
        .bind(body.as_str())
        .bind(featured_image)
        .bind(i64::from(category_id))
        .bind(featured)
        .bind(scheduled_at)
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn transition(&self, change: StatusChange) -> DomainResult<Article> {
        let StatusChange {
            id,
            transition,
            guard,
            at,
        } = change;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles AS a SET status = ");
        builder.push_bind(transition.target().as_str());
        builder.push(", updated_at = ");
        builder.push_bind(at);
        if transition.stamps_published_at() {
            builder.push(", published_at = COALESCE(a.published_at, ");
            builder.push_bind(at);
            builder.push(")");
        }
        builder.push(" WHERE a.id = ");
        builder.push_bind(i64::from(id));
        if let Some(sources) = guard {
            let sources: Vec<String> = sources.iter().map(|s| s.as_str().to_owned()).collect();
            builder.push(" AND a.status = ANY(");
            builder.push_bind(sources);
            builder.push(")");
        }
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if let Some(row) = maybe_row {
            return Article::try_from(row);
        }

        if guard.is_some() && self.exists(id).await? {
            return Err(DomainError::Conflict(format!(
                "cannot {} the article from its current status",
                transition.name()
            )));
        }
        Err(DomainError::NotFound("article not found".into()))
    }

    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("UPDATE articles SET view_count = view_count + 1 WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl PostgresArticleWriteRepository {
    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM articles WHERE id = $1)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<ArticlePage> {
        let predicates = filter.predicates();
        let mut page_query = query::select_page(&predicates, sort, page);
        let mut count_query = query::select_count(&predicates);

        // Two independent statements; slight skew under concurrent writes is
        // acceptable for a paginated listing.
        let (rows, total) = tokio::try_join!(
            page_query
                .build_query_as::<ArticleRow>()
                .fetch_all(&self.pool),
            count_query.build_query_scalar::<i64>().fetch_one(&self.pool),
        )
        .map_err(map_sqlx)?;

        Ok(ArticlePage {
            items: into_articles(rows)?,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn related(&self, id: ArticleId, limit: u32) -> DomainResult<Vec<Article>> {
        let rows = query::select_related(id, limit)
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_articles(rows)
    }
}
