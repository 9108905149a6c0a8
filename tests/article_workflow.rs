// tests/article_workflow.rs
use chrono::Duration;
use newsroom_core::application::commands::articles::{
    CreateRevisionCommand, DeleteArticleCommand, TransitionArticleCommand, UpdateArticleCommand,
    UpdateStatusCommand,
};
use newsroom_core::application::error::ApplicationError;
use newsroom_core::application::queries::articles::{
    GetArticleByIdQuery, GetArticleBySlugQuery, ListArticleRevisionsQuery,
};
use newsroom_core::domain::article::{ArticleStatus, ArticleTransition};
use newsroom_core::domain::errors::DomainError;

mod support;
use support::{TestApp, draft, fixed_now};

fn is_not_found(err: &ApplicationError) -> bool {
    matches!(
        err,
        ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_))
    )
}

fn is_conflict(err: &ApplicationError) -> bool {
    matches!(
        err,
        ApplicationError::Conflict(_) | ApplicationError::Domain(DomainError::Conflict(_))
    )
}

#[tokio::test]
async fn new_article_starts_as_draft() {
    let app = TestApp::new();
    let article = app.create(draft("Lũ lụt miền Trung")).await;

    assert_eq!(article.status, ArticleStatus::Draft);
    assert_eq!(article.slug, "lu-lut-mien-trung");
    assert_eq!(article.view_count, 0);
    assert!(article.published_at.is_none());
    assert_eq!(article.created_at, fixed_now());
}

#[tokio::test]
async fn publishing_twice_keeps_first_publication_time() {
    let app = TestApp::new();
    let article = app.create(draft("Election night")).await;
    let commands = &app.services.article_commands;

    app.clock.advance(Duration::minutes(10));
    let first = commands.publish(article.id).await.unwrap();
    let stamped = first.published_at.expect("published_at set");
    assert_eq!(stamped, fixed_now() + Duration::minutes(10));

    app.clock.advance(Duration::hours(2));
    let second = commands.publish(article.id).await.unwrap();
    assert_eq!(second.status, ArticleStatus::Published);
    assert_eq!(second.published_at, Some(stamped));
    assert!(second.updated_at > first.updated_at);
}

#[tokio::test]
async fn hiding_and_republishing_preserves_published_at() {
    let app = TestApp::new();
    let article = app.create(draft("Budget vote")).await;
    let commands = &app.services.article_commands;

    let published = commands.publish(article.id).await.unwrap();
    app.clock.advance(Duration::days(1));
    let hidden = commands.unpublish(article.id).await.unwrap();
    assert_eq!(hidden.status, ArticleStatus::Hidden);
    assert_eq!(hidden.published_at, published.published_at);

    app.clock.advance(Duration::days(1));
    let back = commands.publish(article.id).await.unwrap();
    assert_eq!(back.published_at, published.published_at);
}

#[tokio::test]
async fn full_editorial_path() {
    let app = TestApp::new();
    let id = app.create(draft("Harbour expansion")).await.id;
    let commands = &app.services.article_commands;

    assert_eq!(
        commands.submit_for_review(id).await.unwrap().status,
        ArticleStatus::UnderReview
    );
    assert_eq!(commands.reject(id).await.unwrap().status, ArticleStatus::Rejected);
    assert_eq!(
        commands.return_to_draft(id).await.unwrap().status,
        ArticleStatus::Draft
    );
    let published = commands.publish(id).await.unwrap();
    assert_eq!(published.status, ArticleStatus::Published);
    assert!(published.published_at.is_some());
}

#[tokio::test]
async fn permissive_policy_allows_any_jump() {
    let app = TestApp::new();
    let id = app.create(draft("Anything goes")).await.id;
    let commands = &app.services.article_commands;

    // draft -> rejected is not in the editorial table but is accepted here.
    let rejected = commands.reject(id).await.unwrap();
    assert_eq!(rejected.status, ArticleStatus::Rejected);
    let published = commands.publish(id).await.unwrap();
    assert_eq!(published.status, ArticleStatus::Published);
}

#[tokio::test]
async fn strict_policy_refuses_transitions_outside_the_table() {
    let app = TestApp::strict();
    let id = app.create(draft("Strict desk")).await.id;
    let commands = &app.services.article_commands;

    let err = commands.reject(id).await.unwrap_err();
    assert!(is_conflict(&err), "expected conflict, got {err:?}");
    let current = app.store.article(id).unwrap();
    assert_eq!(current.status, ArticleStatus::Draft);

    commands.submit_for_review(id).await.unwrap();
    commands.reject(id).await.unwrap();
    let err = commands.publish(id).await.unwrap_err();
    assert!(is_conflict(&err));
    assert!(app.store.article(id).unwrap().published_at.is_none());
}

#[tokio::test]
async fn transition_on_missing_article_is_not_found() {
    for app in [TestApp::new(), TestApp::strict()] {
        let err = app
            .services
            .article_commands
            .transition_article(TransitionArticleCommand {
                id: 999,
                transition: ArticleTransition::Publish,
            })
            .await
            .unwrap_err();
        assert!(is_not_found(&err), "expected not found, got {err:?}");
    }
}

#[tokio::test]
async fn status_can_be_set_by_name() {
    let app = TestApp::new();
    let id = app.create(draft("Named status")).await.id;
    let commands = &app.services.article_commands;

    let updated = commands
        .update_status(UpdateStatusCommand {
            id,
            status: "under_review".into(),
        })
        .await
        .unwrap();
    assert_eq!(updated.status, ArticleStatus::UnderReview);

    let err = commands
        .update_status(UpdateStatusCommand {
            id,
            status: "archived".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn editing_content_never_changes_status() {
    let app = TestApp::new();
    let id = app.create(draft("Original headline")).await.id;
    let commands = &app.services.article_commands;
    let published = commands.publish(id).await.unwrap();

    app.clock.advance(Duration::minutes(5));
    let updated = commands
        .update_article(UpdateArticleCommand {
            id,
            title: "Corrected headline".into(),
            slug: None,
            summary: Some("Now with a summary".into()),
            body: "Corrected body".into(),
            featured_image: None,
            category_id: 2,
            featured: true,
            scheduled_at: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.status, ArticleStatus::Published);
    assert_eq!(updated.published_at, published.published_at);
    assert_eq!(updated.slug, published.slug);
    assert_eq!(updated.title, "Corrected headline");
    assert_eq!(updated.category_id, 2);
    assert!(updated.featured);
    assert_eq!(updated.updated_at, fixed_now() + Duration::minutes(5));
}

#[tokio::test]
async fn generated_slugs_get_numeric_suffixes() {
    let app = TestApp::new();
    let first = app.create(draft("Weather update")).await;
    let second = app.create(draft("Weather update")).await;
    let third = app.create(draft("Weather update")).await;

    assert_eq!(first.slug, "weather-update");
    assert_eq!(second.slug, "weather-update-1");
    assert_eq!(third.slug, "weather-update-2");
}

#[tokio::test]
async fn explicit_duplicate_slug_conflicts() {
    let app = TestApp::new();
    let mut command = draft("One");
    command.slug = Some("shared".into());
    app.create(command).await;

    let mut duplicate = draft("Two");
    duplicate.slug = Some("shared".into());
    let err = app
        .services
        .article_commands
        .create_article(duplicate)
        .await
        .unwrap_err();
    assert!(is_conflict(&err));
}

#[tokio::test]
async fn invalid_input_is_rejected_before_storage() {
    let app = TestApp::new();
    let commands = &app.services.article_commands;

    let mut blank = draft("x");
    blank.title = "   ".into();
    assert!(commands.create_article(blank).await.is_err());

    let mut bad_slug = draft("Bad slug");
    bad_slug.slug = Some("Not A Slug".into());
    assert!(commands.create_article(bad_slug).await.is_err());

    let mut unknown_category = draft("Nowhere");
    unknown_category.category_id = 404;
    let err = commands.create_article(unknown_category).await.unwrap_err();
    assert!(is_not_found(&err));
}

#[tokio::test]
async fn lookups_by_id_and_slug() {
    let app = TestApp::new();
    let created = app.create(draft("Find me")).await;
    let queries = &app.services.article_queries;

    let by_id = queries
        .get_article_by_id(GetArticleByIdQuery { id: created.id })
        .await
        .unwrap();
    assert_eq!(by_id.slug, "find-me");

    let by_slug = queries
        .get_article_by_slug(GetArticleBySlugQuery {
            slug: "find-me".into(),
        })
        .await
        .unwrap();
    assert_eq!(by_slug.id, created.id);

    let err = queries
        .get_article_by_slug(GetArticleBySlugQuery {
            slug: "../etc/passwd".into(),
        })
        .await
        .unwrap_err();
    assert!(is_not_found(&err));
}

#[tokio::test]
async fn delete_removes_article() {
    let app = TestApp::new();
    let id = app.create(draft("Short lived")).await.id;
    let commands = &app.services.article_commands;

    commands.delete_article(DeleteArticleCommand { id }).await.unwrap();
    assert!(app.store.article(id).is_none());
    let err = commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .unwrap_err();
    assert!(is_not_found(&err));
}

#[tokio::test]
async fn revisions_snapshot_current_content_newest_first() {
    let app = TestApp::new();
    let id = app.create(draft("Draft one")).await.id;
    let commands = &app.services.article_commands;

    let snapshot = commands
        .create_revision(CreateRevisionCommand {
            article_id: id,
            editor_id: 2,
            title: None,
            body: None,
        })
        .await
        .unwrap();
    assert_eq!(snapshot.title, "Draft one");
    assert_eq!(snapshot.body, "Body of Draft one");

    app.clock.advance(Duration::minutes(1));
    commands
        .create_revision(CreateRevisionCommand {
            article_id: id,
            editor_id: 3,
            title: Some("Draft two".into()),
            body: Some("Second body".into()),
        })
        .await
        .unwrap();

    let revisions = app
        .services
        .article_queries
        .list_revisions(ListArticleRevisionsQuery { article_id: id })
        .await
        .unwrap();
    let titles: Vec<&str> = revisions.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Draft two", "Draft one"]);

    let err = commands
        .create_revision(CreateRevisionCommand {
            article_id: 999,
            editor_id: 1,
            title: None,
            body: None,
        })
        .await
        .unwrap_err();
    assert!(is_not_found(&err));
}
