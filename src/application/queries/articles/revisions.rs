use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleRevisionDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct ListArticleRevisionsQuery {
    pub article_id: i64,
}

impl ArticleQueryService {
    pub async fn list_revisions(
        &self,
        query: ListArticleRevisionsQuery,
    ) -> ApplicationResult<Vec<ArticleRevisionDto>> {
        let article_id = ArticleId::new(query.article_id)?;
        self.ensure_exists(article_id).await?;

        let revisions = self.revision_repo.list_by_article(article_id).await?;

        Ok(revisions.into_iter().map(Into::into).collect())
    }
}
