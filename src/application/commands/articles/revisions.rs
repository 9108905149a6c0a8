use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleRevisionDto, error::ApplicationResult},
    domain::{
        article::{ArticleBody, ArticleId, ArticleTitle, NewArticleRevision},
        user::UserId,
    },
};

/// Captures a revision. Omitted title/body are taken from the article as it
/// currently stands.
pub struct CreateRevisionCommand {
    pub article_id: i64,
    pub editor_id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl ArticleCommandService {
    pub async fn create_revision(
        &self,
        command: CreateRevisionCommand,
    ) -> ApplicationResult<ArticleRevisionDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let editor_id = UserId::new(command.editor_id)?;
        let article = self.load(article_id).await?;

        let title = command
            .title
            .map(ArticleTitle::new)
            .transpose()?
            .unwrap_or(article.title);
        let body = command
            .body
            .map(ArticleBody::new)
            .transpose()?
            .unwrap_or(article.body);

        let revision = self
            .revision_repo
            .append(NewArticleRevision {
                article_id,
                title,
                body,
                editor_id,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(revision.into())
    }
}
