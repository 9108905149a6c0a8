// tests/support/builders.rs
use super::helpers::TestApp;
use chrono::Duration;
use newsroom_core::application::commands::articles::{AddTagCommand, CreateArticleCommand};
use newsroom_core::application::dto::ArticleDto;

/// Draft in category 1 by author 1.
pub fn draft(title: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .body(format!("Body of {title}"))
        .author_id(1)
        .category_id(1)
        .build()
        .unwrap()
}

pub fn draft_in(title: &str, category_id: i64) -> CreateArticleCommand {
    CreateArticleCommand {
        category_id,
        ..draft(title)
    }
}

impl TestApp {
    pub async fn create(&self, command: CreateArticleCommand) -> ArticleDto {
        self.services
            .article_commands
            .create_article(command)
            .await
            .unwrap()
    }

    /// Creates and publishes an article, one minute after the previous call.
    pub async fn published(&self, title: &str, category_id: i64) -> ArticleDto {
        self.clock.advance(Duration::minutes(1));
        let created = self.create(draft_in(title, category_id)).await;
        self.services
            .article_commands
            .publish(created.id)
            .await
            .unwrap()
    }

    pub async fn tag(&self, article_id: i64, tag_id: i64) {
        self.services
            .article_commands
            .add_tag(AddTagCommand { article_id, tag_id })
            .await
            .unwrap();
    }
}
