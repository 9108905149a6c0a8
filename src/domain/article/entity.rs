// src/domain/article/entity.rs
use crate::domain::article::status::{ArticleStatus, ArticleTransition};
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::taxonomy::CategoryId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub summary: Option<String>,
    pub body: ArticleBody,
    pub featured_image: Option<String>,
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub status: ArticleStatus,
    pub view_count: i64,
    pub featured: bool,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Moves the article to the transition's target state. `published_at` is
    /// only ever filled in, never cleared or overwritten.
    pub fn apply_transition(&mut self, transition: ArticleTransition, now: DateTime<Utc>) {
        self.status = transition.target();
        if transition.stamps_published_at() && self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.updated_at = now;
    }

    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    /// Overwrites the editable fields. Status, author, counters and the
    /// publish stamp are left alone.
    pub fn apply_update(&mut self, update: &ArticleUpdate) {
        self.title = update.title.clone();
        self.slug = update.slug.clone();
        self.summary = update.summary.clone();
        self.body = update.body.clone();
        self.featured_image = update.featured_image.clone();
        self.category_id = update.category_id;
        self.featured = update.featured;
        self.scheduled_at = update.scheduled_at;
        self.updated_at = update.updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub summary: Option<String>,
    pub body: ArticleBody,
    pub featured_image: Option<String>,
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub featured: bool,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of an article's editable fields.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub summary: Option<String>,
    pub body: ArticleBody,
    pub featured_image: Option<String>,
    pub category_id: CategoryId,
    pub featured: bool,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// A single status write addressed by primary key. When `guard` is set the
/// write only applies if the current status is one of the listed states.
#[derive(Debug, Clone)]
pub struct StatusChange {
    pub id: ArticleId,
    pub transition: ArticleTransition,
    pub guard: Option<&'static [ArticleStatus]>,
    pub at: DateTime<Utc>,
}
