use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle, StatusChange};
use crate::domain::article::filter::ArticleFilter;
use crate::domain::article::page::{ArticlePage, PageRequest};
use crate::domain::article::revision::{ArticleRevision, NewArticleRevision};
use crate::domain::article::sort::SortSpec;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::article::view::ArticleView;
use crate::domain::errors::DomainResult;
use crate::domain::taxonomy::{Tag, TagId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Applies a status change in one statement. Fails with `NotFound` for a
    /// missing id and `Conflict` when a guard refuses the current status.
    async fn transition(&self, change: StatusChange) -> DomainResult<Article>;
    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Returns one page of matches and the total match count, both built
    /// from the same predicates.
    async fn list(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<ArticlePage>;
    /// Published articles sharing the category or at least one tag with
    /// `id`, newest publication first, each at most once, `id` excluded.
    async fn related(&self, id: ArticleId, limit: u32) -> DomainResult<Vec<Article>>;
}

#[async_trait]
pub trait ArticleTagRepository: Send + Sync {
    /// Adding an existing association is a no-op.
    async fn add_tag(&self, article_id: ArticleId, tag_id: TagId) -> DomainResult<()>;
    async fn remove_tag(&self, article_id: ArticleId, tag_id: TagId) -> DomainResult<()>;
    async fn list_tags(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>>;
}

#[async_trait]
pub trait ArticleRevisionRepository: Send + Sync {
    async fn append(&self, revision: NewArticleRevision) -> DomainResult<ArticleRevision>;
    /// Newest first.
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleRevision>>;
}

#[async_trait]
pub trait ArticleViewLogRepository: Send + Sync {
    /// Whether the same client viewed the article strictly after `since`.
    async fn seen_since(&self, view: &ArticleView, since: DateTime<Utc>) -> DomainResult<bool>;
    async fn append(&self, view: &ArticleView) -> DomainResult<()>;
}
