use crate::domain::article::value_objects::ArticleId;
use chrono::{DateTime, Utc};

/// One entry of the view dedup ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub article_id: ArticleId,
    pub client_ip: String,
    pub user_agent: String,
    pub viewed_at: DateTime<Utc>,
}

impl ArticleView {
    pub fn same_client(&self, other: &Self) -> bool {
        self.article_id == other.article_id
            && self.client_ip == other.client_ip
            && self.user_agent == other.user_agent
    }
}
