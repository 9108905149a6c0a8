use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle, ArticleUpdate},
        taxonomy::CategoryId,
    },
};
use chrono::{DateTime, Utc};

/// Replaces every editable field. `slug: None` keeps the current slug.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub body: String,
    pub featured_image: Option<String>,
    pub category_id: i64,
    pub featured: bool,
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let category_id = CategoryId::new(command.category_id)?;

        let slug = match command.slug {
            Some(raw) => ArticleSlug::new(raw)?,
            None => self.load(id).await?.slug,
        };

        let update = ArticleUpdate {
            id,
            title,
            slug,
            summary: command.summary,
            body,
            featured_image: command.featured_image,
            category_id,
            featured: command.featured,
            scheduled_at: command.scheduled_at,
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
