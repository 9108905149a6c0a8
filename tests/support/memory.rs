// tests/support/memory.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use newsroom_core::application::ports::time::Clock;
use newsroom_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticlePage, ArticlePredicate, ArticleReadRepository,
    ArticleRevision, ArticleRevisionRepository, ArticleSlug, ArticleStatus, ArticleTagRepository,
    ArticleUpdate, ArticleView, ArticleViewLogRepository, ArticleWriteRepository,
    NewArticle, NewArticleRevision, PageRequest, SortDirection, SortField, SortSpec,
    StatusChange,
};
use newsroom_core::domain::errors::{DomainError, DomainResult};
use newsroom_core::domain::taxonomy::{CategoryId, Tag, TagId};
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

/* -------------------------------- clock -------------------------------- */

static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Clock the test moves by hand.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock().unwrap() = at;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(fixed_now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/* -------------------------------- store -------------------------------- */

pub const SEEDED_USERS: [i64; 3] = [1, 2, 3];

/// (id, slug) of the seeded categories.
pub const SEEDED_CATEGORIES: [(i64, &str); 3] =
    [(1, "thoi-su"), (2, "the-gioi"), (17, "kinh-te")];

/// (id, name, slug) of the seeded tags.
pub const SEEDED_TAGS: [(i64, &str, &str); 4] = [
    (1, "Asia", "asia"),
    (2, "Europe", "europe"),
    (3, "Health", "health"),
    (4, "Sport", "sport"),
];

#[derive(Default)]
struct StoreState {
    next_article_id: i64,
    next_revision_id: i64,
    articles: BTreeMap<i64, Article>,
    article_tags: BTreeSet<(i64, i64)>,
    revisions: Vec<ArticleRevision>,
    views: Vec<ArticleView>,
}

/// One in-memory database behind every article repository trait, with the
/// same constraint behaviour as the Postgres schema.
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    view_log_failing: AtomicBool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(what: &str) -> DomainError {
    DomainError::NotFound(format!("{what} not found"))
}

fn category_id_for(slug: &str) -> Option<i64> {
    SEEDED_CATEGORIES
        .iter()
        .find(|(_, s)| *s == slug)
        .map(|(id, _)| *id)
}

fn tag_id_for(slug: &str) -> Option<i64> {
    SEEDED_TAGS
        .iter()
        .find(|(_, _, s)| *s == slug)
        .map(|(id, _, _)| *id)
}

fn category_exists(id: CategoryId) -> bool {
    SEEDED_CATEGORIES.iter().any(|(c, _)| *c == id.0)
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                next_article_id: 1,
                next_revision_id: 1,
                ..StoreState::default()
            }),
            view_log_failing: AtomicBool::new(false),
        }
    }

    /// Makes every view-ledger call fail until switched back.
    pub fn set_view_log_failing(&self, failing: bool) {
        self.view_log_failing.store(failing, AtomicOrdering::SeqCst);
    }

    pub fn view_rows(&self) -> usize {
        self.state.lock().unwrap().views.len()
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        self.state.lock().unwrap().articles.get(&id).cloned()
    }

    fn check_view_log(&self) -> DomainResult<()> {
        if self.view_log_failing.load(AtomicOrdering::SeqCst) {
            Err(DomainError::Persistence("view ledger unavailable".into()))
        } else {
            Ok(())
        }
    }
}

impl StoreState {
    fn slug_taken(&self, slug: &ArticleSlug, except: Option<i64>) -> bool {
        self.articles
            .values()
            .any(|a| a.slug.as_str() == slug.as_str() && Some(a.id.0) != except)
    }

    fn has_tag(&self, article_id: i64, tag_slug: &str) -> bool {
        tag_id_for(tag_slug).is_some_and(|tag| self.article_tags.contains(&(article_id, tag)))
    }

    fn matches(&self, article: &Article, predicate: &ArticlePredicate) -> bool {
        match predicate {
            ArticlePredicate::CategoryEquals(id) => article.category_id == *id,
            ArticlePredicate::CategorySlug(slug) => {
                category_id_for(slug) == Some(article.category_id.0)
            }
            ArticlePredicate::AuthorEquals(id) => article.author_id == *id,
            ArticlePredicate::StatusEquals(status) => article.status == *status,
            ArticlePredicate::Featured(featured) => article.featured == *featured,
            ArticlePredicate::PublishedFrom(from) => {
                article.published_at.is_some_and(|at| at >= *from)
            }
            ArticlePredicate::PublishedTo(to) => article.published_at.is_some_and(|at| at <= *to),
            ArticlePredicate::TextContains(text) => {
                let needle = text.to_lowercase();
                article.title.as_str().to_lowercase().contains(&needle)
                    || article.body.as_str().to_lowercase().contains(&needle)
            }
            ArticlePredicate::TagSlug(slug) => self.has_tag(article.id.0, slug),
            ArticlePredicate::TagIn(slugs) => {
                slugs.iter().any(|slug| self.has_tag(article.id.0, slug))
            }
        }
    }

    fn tag_ids(&self, article_id: i64) -> BTreeSet<i64> {
        self.article_tags
            .iter()
            .filter(|(a, _)| *a == article_id)
            .map(|(_, t)| *t)
            .collect()
    }
}

fn compare_published(a: &Article, b: &Article, direction: SortDirection) -> Ordering {
    match (a.published_at, b.published_at) {
        (Some(x), Some(y)) => match direction {
            SortDirection::Asc => x.cmp(&y),
            SortDirection::Desc => y.cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare(a: &Article, b: &Article, sort: &SortSpec) -> Ordering {
    for key in sort.keys() {
        let ordering = if key.field == SortField::PublishedAt {
            compare_published(a, b, key.direction)
        } else {
            let natural = match key.field {
                SortField::CreatedAt => a.created_at.cmp(&b.created_at),
                SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
                SortField::Title => a.title.as_str().cmp(b.title.as_str()),
                SortField::ViewCount => a.view_count.cmp(&b.view_count),
                SortField::PublishedAt => Ordering::Equal,
            };
            match key.direction {
                SortDirection::Asc => natural,
                SortDirection::Desc => natural.reverse(),
            }
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    b.id.0.cmp(&a.id.0)
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if state.slug_taken(&article.slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if !SEEDED_USERS.contains(&article.author_id.0) {
            return Err(not_found("author"));
        }
        if !category_exists(article.category_id) {
            return Err(not_found("category"));
        }

        let id = state.next_article_id;
        state.next_article_id += 1;
        let created = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            slug: article.slug,
            summary: article.summary,
            body: article.body,
            featured_image: article.featured_image,
            author_id: article.author_id,
            category_id: article.category_id,
            status: ArticleStatus::Draft,
            view_count: 0,
            featured: article.featured,
            scheduled_at: article.scheduled_at,
            published_at: None,
            created_at: article.created_at,
            updated_at: article.created_at,
        };
        state.articles.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let id = update.id.0;
        if !state.articles.contains_key(&id) {
            return Err(not_found("article"));
        }
        if state.slug_taken(&update.slug, Some(id)) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if !category_exists(update.category_id) {
            return Err(not_found("category"));
        }
        let article = state.articles.get_mut(&id).ok_or_else(|| not_found("article"))?;
        article.apply_update(&update);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.articles.remove(&id.0).is_none() {
            return Err(not_found("article"));
        }
        state.article_tags.retain(|(a, _)| *a != id.0);
        state.revisions.retain(|r| r.article_id != id);
        state.views.retain(|v| v.article_id != id);
        Ok(())
    }

    async fn transition(&self, change: StatusChange) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .get_mut(&change.id.0)
            .ok_or_else(|| not_found("article"))?;
        if let Some(sources) = change.guard {
            if !sources.contains(&article.status) {
                return Err(DomainError::Conflict(format!(
                    "cannot {} the article from its current status",
                    change.transition.name()
                )));
            }
        }
        article.apply_transition(change.transition, change.at);
        Ok(article.clone())
    }

    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .get_mut(&id.0)
            .ok_or_else(|| not_found("article"))?;
        article.view_count += 1;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.state.lock().unwrap().articles.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .values()
            .find(|a| a.slug.as_str() == slug.as_str())
            .cloned())
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<ArticlePage> {
        let state = self.state.lock().unwrap();
        let predicates = filter.predicates();
        let mut matched: Vec<Article> = state
            .articles
            .values()
            .filter(|a| predicates.iter().all(|p| state.matches(a, p)))
            .cloned()
            .collect();
        matched.sort_by(|a, b| compare(a, b, sort));

        let total = matched.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        let items = matched.into_iter().skip(offset).take(limit).collect();
        Ok(ArticlePage { items, total })
    }

    async fn related(&self, id: ArticleId, limit: u32) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let Some(source) = state.articles.get(&id.0) else {
            return Ok(Vec::new());
        };
        let source_tags = state.tag_ids(id.0);

        let mut related: Vec<Article> = state
            .articles
            .values()
            .filter(|a| a.id != id && a.status == ArticleStatus::Published)
            .filter(|a| {
                a.category_id == source.category_id
                    || !state.tag_ids(a.id.0).is_disjoint(&source_tags)
            })
            .cloned()
            .collect();
        related.sort_by(|a, b| {
            compare_published(a, b, SortDirection::Desc).then_with(|| b.id.0.cmp(&a.id.0))
        });
        related.truncate(limit as usize);
        Ok(related)
    }
}

#[async_trait]
impl ArticleTagRepository for InMemoryStore {
    async fn add_tag(&self, article_id: ArticleId, tag_id: TagId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if !state.articles.contains_key(&article_id.0) {
            return Err(not_found("article"));
        }
        if !SEEDED_TAGS.iter().any(|(id, _, _)| *id == tag_id.0) {
            return Err(not_found("tag"));
        }
        state.article_tags.insert((article_id.0, tag_id.0));
        Ok(())
    }

    async fn remove_tag(&self, article_id: ArticleId, tag_id: TagId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .article_tags
            .remove(&(article_id.0, tag_id.0));
        Ok(())
    }

    async fn list_tags(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>> {
        let state = self.state.lock().unwrap();
        let ids = state.tag_ids(article_id.0);
        let mut tags: Vec<Tag> = SEEDED_TAGS
            .iter()
            .filter(|(id, _, _)| ids.contains(id))
            .map(|(id, name, slug)| Tag {
                id: TagId(*id),
                name: (*name).to_owned(),
                slug: (*slug).to_owned(),
            })
            .collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.0.cmp(&b.id.0)));
        Ok(tags)
    }
}

#[async_trait]
impl ArticleRevisionRepository for InMemoryStore {
    async fn append(&self, revision: NewArticleRevision) -> DomainResult<ArticleRevision> {
        let mut state = self.state.lock().unwrap();
        if !state.articles.contains_key(&revision.article_id.0) {
            return Err(not_found("article"));
        }
        if !SEEDED_USERS.contains(&revision.editor_id.0) {
            return Err(not_found("editor"));
        }
        let id = state.next_revision_id;
        state.next_revision_id += 1;
        let stored = ArticleRevision {
            id,
            article_id: revision.article_id,
            title: revision.title,
            body: revision.body,
            editor_id: revision.editor_id,
            created_at: revision.created_at,
        };
        state.revisions.push(stored.clone());
        Ok(stored)
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleRevision>> {
        let state = self.state.lock().unwrap();
        let mut revisions: Vec<ArticleRevision> = state
            .revisions
            .iter()
            .filter(|r| r.article_id == article_id)
            .cloned()
            .collect();
        revisions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(revisions)
    }
}

#[async_trait]
impl ArticleViewLogRepository for InMemoryStore {
    async fn seen_since(&self, view: &ArticleView, since: DateTime<Utc>) -> DomainResult<bool> {
        self.check_view_log()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .views
            .iter()
            .any(|seen| seen.same_client(view) && seen.viewed_at > since))
    }

    async fn append(&self, view: &ArticleView) -> DomainResult<()> {
        self.check_view_log()?;
        let mut state = self.state.lock().unwrap();
        if !state.articles.contains_key(&view.article_id.0) {
            return Err(not_found("article"));
        }
        state.views.push(view.clone());
        Ok(())
    }
}
