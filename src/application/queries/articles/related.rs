use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct RelatedArticlesQuery {
    pub article_id: i64,
    pub limit: u32,
}

impl RelatedArticlesQuery {
    pub const DEFAULT_LIMIT: u32 = 5;
    pub const MAX_LIMIT: u32 = 20;
}

impl ArticleQueryService {
    pub async fn related_articles(
        &self,
        query: RelatedArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let id = ArticleId::new(query.article_id)?;
        self.ensure_exists(id).await?;

        let limit = if query.limit == 0 {
            RelatedArticlesQuery::DEFAULT_LIMIT
        } else {
            query.limit.min(RelatedArticlesQuery::MAX_LIMIT)
        };

        let related = self.read_repo.related(id, limit).await?;
        Ok(related.into_iter().map(Into::into).collect())
    }
}
