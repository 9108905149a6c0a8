// src/domain/article/services/view_recorder.rs
use std::sync::Arc;

use chrono::Duration;

use crate::domain::article::repository::ArticleViewLogRepository;
use crate::domain::article::view::ArticleView;

/// Result of offering a view to the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    /// A new ledger row was written; the caller should count the view.
    Recorded,
    /// The same client was already seen inside the window.
    Duplicate,
    /// The ledger could not be read or written. The error was logged and
    /// the view is not counted.
    Dropped,
}

impl ViewOutcome {
    pub fn should_count(self) -> bool {
        matches!(self, Self::Recorded)
    }
}

/// Gate in front of the view counter. Check, insert and the caller's
/// increment are separate statements, so two identical requests racing
/// inside the window can both be recorded.
pub struct ViewRecorder {
    log: Arc<dyn ArticleViewLogRepository>,
    window: Duration,
}

impl ViewRecorder {
    pub const DEFAULT_WINDOW_SECS: i64 = 60;

    pub fn new(log: Arc<dyn ArticleViewLogRepository>, window: Duration) -> Self {
        Self { log, window }
    }

    pub fn with_default_window(log: Arc<dyn ArticleViewLogRepository>) -> Self {
        Self::new(log, Duration::seconds(Self::DEFAULT_WINDOW_SECS))
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub async fn record(&self, view: &ArticleView) -> ViewOutcome {
        let since = view.viewed_at - self.window;
        match self.log.seen_since(view, since).await {
            Ok(true) => return ViewOutcome::Duplicate,
            Ok(false) => {}
            Err(err) => {
                tracing::warn!(
                    article_id = %view.article_id,
                    error = %err,
                    "view dedup lookup failed, dropping view"
                );
                return ViewOutcome::Dropped;
            }
        }

        match self.log.append(view).await {
            Ok(()) => ViewOutcome::Recorded,
            Err(err) => {
                tracing::warn!(
                    article_id = %view.article_id,
                    error = %err,
                    "view log write failed, dropping view"
                );
                ViewOutcome::Dropped
            }
        }
    }
}
