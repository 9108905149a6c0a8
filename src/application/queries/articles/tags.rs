use super::ArticleQueryService;
use crate::{
    application::{dto::TagDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct ListArticleTagsQuery {
    pub article_id: i64,
}

impl ArticleQueryService {
    pub async fn list_tags(&self, query: ListArticleTagsQuery) -> ApplicationResult<Vec<TagDto>> {
        let article_id = ArticleId::new(query.article_id)?;
        self.ensure_exists(article_id).await?;

        let tags = self.tag_repo.list_tags(article_id).await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }
}
