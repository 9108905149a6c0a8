// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::article::{
        Article, ArticleId, ArticleReadRepository, ArticleRevisionRepository,
        ArticleTagRepository, ArticleWriteRepository, WorkflowPolicy,
        services::{ArticleSlugService, ViewRecorder},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) tag_repo: Arc<dyn ArticleTagRepository>,
    pub(super) revision_repo: Arc<dyn ArticleRevisionRepository>,
    pub(super) view_recorder: Arc<ViewRecorder>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) policy: WorkflowPolicy,
}

impl ArticleCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn ArticleTagRepository>,
        revision_repo: Arc<dyn ArticleRevisionRepository>,
        view_recorder: Arc<ViewRecorder>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
        policy: WorkflowPolicy,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            tag_repo,
            revision_repo,
            view_recorder,
            slug_service,
            clock,
            policy,
        }
    }

    pub fn policy(&self) -> WorkflowPolicy {
        self.policy
    }

    pub(super) async fn load(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
