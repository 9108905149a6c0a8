use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{article::ArticleId, taxonomy::TagId},
};

pub struct AddTagCommand {
    pub article_id: i64,
    pub tag_id: i64,
}

pub struct RemoveTagCommand {
    pub article_id: i64,
    pub tag_id: i64,
}

impl ArticleCommandService {
    pub async fn add_tag(&self, command: AddTagCommand) -> ApplicationResult<()> {
        let article_id = ArticleId::new(command.article_id)?;
        let tag_id = TagId::new(command.tag_id)?;
        self.tag_repo.add_tag(article_id, tag_id).await?;
        Ok(())
    }

    /// Detaching a tag the article does not carry is a no-op.
    pub async fn remove_tag(&self, command: RemoveTagCommand) -> ApplicationResult<()> {
        let article_id = ArticleId::new(command.article_id)?;
        let tag_id = TagId::new(command.tag_id)?;
        self.load(article_id).await?;
        self.tag_repo.remove_tag(article_id, tag_id).await?;
        Ok(())
    }
}
