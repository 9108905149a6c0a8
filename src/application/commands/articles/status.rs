// src/application/commands/articles/status.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleStatus, ArticleTransition, StatusChange},
};

pub struct TransitionArticleCommand {
    pub id: i64,
    pub transition: ArticleTransition,
}

pub struct UpdateStatusCommand {
    pub id: i64,
    pub status: String,
}

impl ArticleCommandService {
    /// Runs one editorial action as a single guarded write. Under the
    /// permissive policy every action is accepted for an existing article.
    pub async fn transition_article(
        &self,
        command: TransitionArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let change = StatusChange {
            id,
            transition: command.transition,
            guard: self.policy.guard(command.transition),
            at: self.clock.now(),
        };

        let updated = self.write_repo.transition(change).await?;
        tracing::debug!(
            article_id = %id,
            transition = command.transition.name(),
            status = %updated.status,
            "article status changed"
        );
        Ok(updated.into())
    }

    pub async fn update_status(&self, command: UpdateStatusCommand) -> ApplicationResult<ArticleDto> {
        let status: ArticleStatus = command
            .status
            .parse()
            .map_err(|_| ApplicationError::validation(format!("unknown status: {}", command.status)))?;

        self.transition_article(TransitionArticleCommand {
            id: command.id,
            transition: ArticleTransition::for_target(status),
        })
        .await
    }

    pub async fn submit_for_review(&self, id: i64) -> ApplicationResult<ArticleDto> {
        self.transition_article(TransitionArticleCommand {
            id,
            transition: ArticleTransition::SubmitForReview,
        })
        .await
    }

    pub async fn publish(&self, id: i64) -> ApplicationResult<ArticleDto> {
        self.transition_article(TransitionArticleCommand {
            id,
            transition: ArticleTransition::Publish,
        })
        .await
    }

    pub async fn reject(&self, id: i64) -> ApplicationResult<ArticleDto> {
        self.transition_article(TransitionArticleCommand {
            id,
            transition: ArticleTransition::Reject,
        })
        .await
    }

    pub async fn unpublish(&self, id: i64) -> ApplicationResult<ArticleDto> {
        self.transition_article(TransitionArticleCommand {
            id,
            transition: ArticleTransition::Unpublish,
        })
        .await
    }

    pub async fn return_to_draft(&self, id: i64) -> ApplicationResult<ArticleDto> {
        self.transition_article(TransitionArticleCommand {
            id,
            transition: ArticleTransition::ReturnToDraft,
        })
        .await
    }
}
