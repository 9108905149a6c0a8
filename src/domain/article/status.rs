// src/domain/article/status.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Editorial state of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    Draft,
    UnderReview,
    Published,
    Hidden,
    Rejected,
}

impl ArticleStatus {
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::UnderReview,
        Self::Published,
        Self::Hidden,
        Self::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::UnderReview => "under_review",
            Self::Published => "published",
            Self::Hidden => "hidden",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| DomainError::Validation(format!("unknown article status: {value}")))
    }
}

/// Named editorial actions. Each one lands the article in a single target
/// state; `allowed_from` documents the editorial graph that the strict
/// policy enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleTransition {
    SubmitForReview,
    Publish,
    Reject,
    Unpublish,
    ReturnToDraft,
}

impl ArticleTransition {
    pub fn target(self) -> ArticleStatus {
        match self {
            Self::SubmitForReview => ArticleStatus::UnderReview,
            Self::Publish => ArticleStatus::Published,
            Self::Reject => ArticleStatus::Rejected,
            Self::Unpublish => ArticleStatus::Hidden,
            Self::ReturnToDraft => ArticleStatus::Draft,
        }
    }

    pub fn allowed_from(self) -> &'static [ArticleStatus] {
        use ArticleStatus::{Draft, Hidden, Published, Rejected, UnderReview};
        match self {
            Self::SubmitForReview => &[Draft, Rejected],
            Self::Publish => &[Draft, UnderReview, Hidden, Published],
            Self::Reject => &[UnderReview, Published],
            Self::Unpublish => &[Published, Hidden],
            Self::ReturnToDraft => &[UnderReview, Rejected, Hidden],
        }
    }

    pub fn permits(self, from: ArticleStatus) -> bool {
        self.allowed_from().contains(&from)
    }

    /// Only the first move into `Published` stamps `published_at`.
    pub fn stamps_published_at(self) -> bool {
        matches!(self, Self::Publish)
    }

    /// The action that produces `status` when set directly.
    pub fn for_target(status: ArticleStatus) -> Self {
        match status {
            ArticleStatus::Draft => Self::ReturnToDraft,
            ArticleStatus::UnderReview => Self::SubmitForReview,
            ArticleStatus::Published => Self::Publish,
            ArticleStatus::Hidden => Self::Unpublish,
            ArticleStatus::Rejected => Self::Reject,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SubmitForReview => "submit_for_review",
            Self::Publish => "publish",
            Self::Reject => "reject",
            Self::Unpublish => "unpublish",
            Self::ReturnToDraft => "return_to_draft",
        }
    }
}

/// How strictly the editorial graph is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowPolicy {
    /// Any state may move to any other; only a missing article fails.
    #[default]
    Permissive,
    /// Transitions are limited to `ArticleTransition::allowed_from`.
    Strict,
}

impl WorkflowPolicy {
    /// Source states to guard the update with, `None` when unguarded.
    pub fn guard(self, transition: ArticleTransition) -> Option<&'static [ArticleStatus]> {
        match self {
            Self::Permissive => None,
            Self::Strict => Some(transition.allowed_from()),
        }
    }

    pub fn check(self, transition: ArticleTransition, from: ArticleStatus) -> DomainResult<()> {
        match self.guard(transition) {
            Some(sources) if !sources.contains(&from) => Err(DomainError::Conflict(format!(
                "cannot {} an article that is {from}",
                transition.name()
            ))),
            _ => Ok(()),
        }
    }
}

impl FromStr for WorkflowPolicy {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(DomainError::Validation(format!(
                "unknown workflow policy: {other}"
            ))),
        }
    }
}
