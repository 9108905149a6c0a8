// src/application/commands/articles/views.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ViewRecordedDto, error::ApplicationResult},
    domain::article::{ArticleId, ArticleView},
};

pub struct RecordViewCommand {
    pub article_id: i64,
    pub client_ip: String,
    pub user_agent: String,
}

impl ArticleCommandService {
    /// Offers the view to the dedup ledger and bumps the counter only when a
    /// new ledger row was written. Ledger failures never reach the caller.
    pub async fn record_view(&self, command: RecordViewCommand) -> ApplicationResult<ViewRecordedDto> {
        let article_id = ArticleId::new(command.article_id)?;
        self.load(article_id).await?;

        let view = ArticleView {
            article_id,
            client_ip: command.client_ip,
            user_agent: command.user_agent,
            viewed_at: self.clock.now(),
        };

        let outcome = self.view_recorder.record(&view).await;
        if outcome.should_count() {
            self.write_repo.increment_view_count(article_id).await?;
        }

        Ok(ViewRecordedDto {
            counted: outcome.should_count(),
        })
    }
}
