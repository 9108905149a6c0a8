// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleBody, ArticleSlug, ArticleTitle, NewArticle},
        taxonomy::CategoryId,
        user::UserId,
    },
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub title: String,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub body: String,
    pub featured_image: Option<String>,
    pub author_id: i64,
    pub category_id: i64,
    pub featured: bool,
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    summary: Option<String>,
    body: Option<String>,
    featured_image: Option<String>,
    author_id: Option<i64>,
    category_id: Option<i64>,
    featured: bool,
    scheduled_at: Option<DateTime<Utc>>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn featured_image(mut self, reference: impl Into<String>) -> Self {
        self.featured_image = Some(reference.into());
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn scheduled_at(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(at);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            summary: self.summary,
            body: self.body.ok_or("body is required")?,
            featured_image: self.featured_image,
            author_id: self.author_id.ok_or("author_id is required")?,
            category_id: self.category_id.ok_or("category_id is required")?,
            featured: self.featured,
            scheduled_at: self.scheduled_at,
        })
    }
}

impl ArticleCommandService {
    /// Creates a draft. Without an explicit slug one is derived from the
    /// title; an explicit slug that is already taken surfaces as a conflict
    /// from the store.
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let author_id = UserId::new(command.author_id)?;
        let category_id = CategoryId::new(command.category_id)?;
        let now = self.clock.now();

        let slug = match command.slug {
            Some(raw) => ArticleSlug::new(raw)?,
            None => {
                self.slug_service
                    .generate_unique_slug(&title, None, now)
                    .await?
            }
        };

        let new_article = NewArticle {
            title,
            slug,
            summary: command.summary,
            body,
            featured_image: command.featured_image,
            author_id,
            category_id,
            featured: command.featured,
            scheduled_at: command.scheduled_at,
            created_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
