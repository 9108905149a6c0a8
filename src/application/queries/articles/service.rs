use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleRevisionRepository, ArticleTagRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) tag_repo: Arc<dyn ArticleTagRepository>,
    pub(super) revision_repo: Arc<dyn ArticleRevisionRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn ArticleTagRepository>,
        revision_repo: Arc<dyn ArticleRevisionRepository>,
    ) -> Self {
        Self {
            read_repo,
            tag_repo,
            revision_repo,
        }
    }

    pub(super) async fn ensure_exists(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
