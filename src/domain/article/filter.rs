// src/domain/article/filter.rs
use crate::domain::article::status::ArticleStatus;
use crate::domain::taxonomy::CategoryId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Sparse description of which articles a listing should return. Every set
/// field narrows the result; unset fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub category_id: Option<CategoryId>,
    pub category_slug: Option<String>,
    pub author_id: Option<UserId>,
    pub status: Option<ArticleStatus>,
    pub featured: Option<bool>,
    pub published_from: Option<DateTime<Utc>>,
    pub published_to: Option<DateTime<Utc>>,
    pub search: Option<String>,
    pub tag: Option<String>,
    /// Matches articles carrying any of these tags.
    pub tags: Vec<String>,
}

/// One condition of a listing. Variants carry caller data only as values;
/// the column each one targets is fixed by the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticlePredicate {
    CategoryEquals(CategoryId),
    CategorySlug(String),
    AuthorEquals(UserId),
    StatusEquals(ArticleStatus),
    Featured(bool),
    PublishedFrom(DateTime<Utc>),
    PublishedTo(DateTime<Utc>),
    TextContains(String),
    TagSlug(String),
    TagIn(Vec<String>),
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

impl ArticleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn with_category_slug(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    pub fn with_author(mut self, id: UserId) -> Self {
        self.author_id = Some(id);
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn published_between(
        mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        self.published_from = from;
        self.published_to = to;
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn with_tag(mut self, slug: impl Into<String>) -> Self {
        self.tag = Some(slug.into());
        self
    }

    pub fn with_any_tag<I, S>(mut self, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = slugs.into_iter().map(Into::into).collect();
        self
    }

    /// Lowers the filter into the predicates to AND together. Blank text
    /// fields and empty tag sets are dropped rather than matched literally.
    pub fn predicates(&self) -> Vec<ArticlePredicate> {
        let mut predicates = Vec::new();

        if let Some(id) = self.category_id {
            predicates.push(ArticlePredicate::CategoryEquals(id));
        }
        if let Some(slug) = non_blank(self.category_slug.as_ref()) {
            predicates.push(ArticlePredicate::CategorySlug(slug));
        }
        if let Some(id) = self.author_id {
            predicates.push(ArticlePredicate::AuthorEquals(id));
        }
        if let Some(status) = self.status {
            predicates.push(ArticlePredicate::StatusEquals(status));
        }
        if let Some(featured) = self.featured {
            predicates.push(ArticlePredicate::Featured(featured));
        }
        if let Some(from) = self.published_from {
            predicates.push(ArticlePredicate::PublishedFrom(from));
        }
        if let Some(to) = self.published_to {
            predicates.push(ArticlePredicate::PublishedTo(to));
        }
        if let Some(text) = non_blank(self.search.as_ref()) {
            predicates.push(ArticlePredicate::TextContains(text));
        }
        if let Some(slug) = non_blank(self.tag.as_ref()) {
            predicates.push(ArticlePredicate::TagSlug(slug));
        }

        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for slug in &self.tags {
            let slug = slug.trim();
            if !slug.is_empty() && !tags.iter().any(|seen| seen == slug) {
                tags.push(slug.to_owned());
            }
        }
        if !tags.is_empty() {
            predicates.push(ArticlePredicate::TagIn(tags));
        }

        predicates
    }
}
