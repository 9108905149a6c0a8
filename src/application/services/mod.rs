// src/application/services/mod.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::articles::ArticleQueryService,
    },
    domain::article::{
        ArticleReadRepository, ArticleRevisionRepository, ArticleTagRepository,
        ArticleViewLogRepository, ArticleWriteRepository, WorkflowPolicy,
        services::{ArticleSlugService, ViewRecorder},
    },
};

/// Repository handles the services are wired from.
#[derive(Clone)]
pub struct ArticleRepositories {
    pub write: Arc<dyn ArticleWriteRepository>,
    pub read: Arc<dyn ArticleReadRepository>,
    pub tags: Arc<dyn ArticleTagRepository>,
    pub revisions: Arc<dyn ArticleRevisionRepository>,
    pub views: Arc<dyn ArticleViewLogRepository>,
}

/// Runtime knobs that shape service behaviour.
#[derive(Debug, Clone, Copy)]
pub struct ServiceOptions {
    pub workflow_policy: WorkflowPolicy,
    pub view_dedup_window: Duration,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            workflow_policy: WorkflowPolicy::default(),
            view_dedup_window: Duration::seconds(ViewRecorder::DEFAULT_WINDOW_SECS),
        }
    }
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: ArticleRepositories,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        options: ServiceOptions,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&repos.read),
            Arc::clone(&slugger),
        ));

        let view_recorder = Arc::new(ViewRecorder::new(
            Arc::clone(&repos.views),
            options.view_dedup_window,
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.write),
            Arc::clone(&repos.read),
            Arc::clone(&repos.tags),
            Arc::clone(&repos.revisions),
            view_recorder,
            slug_service,
            Arc::clone(&clock),
            options.workflow_policy,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.read),
            Arc::clone(&repos.tags),
            Arc::clone(&repos.revisions),
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
