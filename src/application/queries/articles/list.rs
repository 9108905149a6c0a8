// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleFilter, ArticleStatus, PageRequest, SortSpec},
        taxonomy::CategoryId,
        user::UserId,
    },
};
use chrono::{DateTime, Utc};

#[derive(Debug, Default, Clone)]
pub struct ListArticlesQuery {
    pub category_id: Option<i64>,
    pub category_slug: Option<String>,
    pub author_id: Option<i64>,
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub published_from: Option<DateTime<Utc>>,
    pub published_to: Option<DateTime<Utc>>,
    pub search: Option<String>,
    pub tag: Option<String>,
    pub tags: Vec<String>,
    pub sort: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let filter = Self::build_filter(&query)?;
        let page = PageRequest::new(query.page, query.page_size);
        let sort = SortSpec::from_optional(query.sort.as_deref());

        let result = self.read_repo.list(&filter, page, &sort).await?;

        let items = result.items.into_iter().map(Into::into).collect();
        Ok(Page::new(items, result.total, page))
    }

    fn build_filter(query: &ListArticlesQuery) -> ApplicationResult<ArticleFilter> {
        let status = query
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<ArticleStatus>()
                    .map_err(|_| ApplicationError::validation(format!("unknown status: {s}")))
            })
            .transpose()?;

        if let (Some(from), Some(to)) = (query.published_from, query.published_to) {
            if from > to {
                return Err(ApplicationError::validation(
                    "published date range is inverted",
                ));
            }
        }

        Ok(ArticleFilter {
            category_id: query.category_id.map(CategoryId::new).transpose()?,
            category_slug: query.category_slug.clone(),
            author_id: query.author_id.map(UserId::new).transpose()?,
            status,
            featured: query.featured,
            published_from: query.published_from,
            published_to: query.published_to,
            search: query.search.clone(),
            tag: query.tag.clone(),
            tags: query.tags.clone(),
        })
    }
}
