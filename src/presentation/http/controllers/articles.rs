// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        AddTagCommand, CreateArticleCommand, CreateRevisionCommand, DeleteArticleCommand,
        RecordViewCommand, RemoveTagCommand, UpdateArticleCommand, UpdateStatusCommand,
    },
    dto::{ArticleDto, ArticleRevisionDto, TagDto, ViewRecordedDto, serde_time},
    queries::articles::{
        GetArticleByIdQuery, GetArticleBySlugQuery, ListArticleRevisionsQuery,
        ListArticleTagsQuery, ListArticlesQuery, RelatedArticlesQuery,
    },
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ClientInfo;
use crate::presentation::http::openapi::ArticleListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Numeric category id.
    pub category_id: Option<i64>,
    /// Category slug; combined with `category_id` when both are given.
    pub category: Option<String>,
    pub author_id: Option<i64>,
    /// One of `draft`, `under_review`, `published`, `hidden`, `rejected`.
    pub status: Option<String>,
    pub featured: Option<bool>,
    /// Lower bound on `published_at`, RFC 3339 or `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Upper bound on `published_at`, RFC 3339 or `YYYY-MM-DD` (whole day).
    pub to: Option<String>,
    /// Case-insensitive substring of title or body.
    pub q: Option<String>,
    /// Single tag slug.
    pub tag: Option<String>,
    /// Comma-separated tag slugs; matches articles carrying any of them.
    pub tags: Option<String>,
    /// Comma-separated sort keys, `-` prefix for descending.
    #[param(example = "-published_at,title")]
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RelatedParams {
    /// Defaults to 5, at most 20.
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    pub body: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub author_id: i64,
    pub category_id: i64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, with = "serde_time::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: String,
    /// Omit to keep the current slug.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    pub body: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub category_id: i64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, with = "serde_time::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[schema(example = "published")]
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRevisionRequest {
    pub editor_id: i64,
    /// Defaults to the article's current title.
    #[serde(default)]
    pub title: Option<String>,
    /// Defaults to the article's current body.
    #[serde(default)]
    pub body: Option<String>,
}

fn parse_bound(raw: Option<&str>, end_of_day: bool) -> HttpResult<Option<DateTime<Utc>>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| HttpError::bad_request(format!("invalid date: {raw}")))?;
    let time = if end_of_day {
        NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999)
    } else {
        NaiveTime::from_hms_opt(0, 0, 0)
    };
    Ok(time.map(|time| date.and_time(time).and_utc()))
}

fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

impl ArticleListParams {
    fn into_query(self) -> HttpResult<ListArticlesQuery> {
        Ok(ListArticlesQuery {
            category_id: self.category_id,
            category_slug: self.category,
            author_id: self.author_id,
            status: self.status,
            featured: self.featured,
            published_from: parse_bound(self.from.as_deref(), false)?,
            published_to: parse_bound(self.to.as_deref(), true)?,
            search: self.q,
            tag: self.tag,
            tags: split_tags(self.tags.as_deref()),
            sort: self.sort,
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(0),
        })
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Filtered, sorted page of articles.", body = ArticleListResponse),
        (status = 400, description = "Malformed filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let query = params.into_query()?;
    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Draft created.", body = ArticleDto),
        (status = 400, description = "Invalid article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown author or category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        slug: payload.slug,
        summary: payload.summary,
        body: payload.body,
        featured_image: payload.featured_image,
        author_id: payload.author_id,
        category_id: payload.category_id,
        featured: payload.featured,
        scheduled_at: payload.scheduled_at,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated; status unchanged.", body = ArticleDto),
        (status = 400, description = "Invalid article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article or category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        summary: payload.summary,
        body: payload.body,
        featured_image: payload.featured_image,
        category_id: payload.category_id,
        featured: payload.featured,
        scheduled_at: payload.scheduled_at,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/submit",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article is under review.", body = ArticleDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Not allowed from the current status.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Workflow"
)]
pub async fn submit_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .submit_for_review(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/publish",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article is published; first publication time is kept.", body = ArticleDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Not allowed from the current status.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Workflow"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .publish(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/reject",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article is rejected.", body = ArticleDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Not allowed from the current status.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Workflow"
)]
pub async fn reject_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .reject(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/unpublish",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article is hidden.", body = ArticleDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Not allowed from the current status.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Workflow"
)]
pub async fn unpublish_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .unpublish(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/draft",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article is back in draft.", body = ArticleDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Not allowed from the current status.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Workflow"
)]
pub async fn return_article_to_draft(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .return_to_draft(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}/status",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status changed.", body = ArticleDto),
        (status = 400, description = "Unknown status.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Not allowed from the current status.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Workflow"
)]
pub async fn update_article_status(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .update_status(UpdateStatusCommand {
            id,
            status: payload.status,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/tags",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Tags on the article, by name.", body = [TagDto]),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn list_article_tags(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<TagDto>>> {
    state
        .services
        .article_queries
        .list_tags(ListArticleTagsQuery { article_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}/tags/{tag_id}",
    params(
        ("id" = i64, Path, description = "Article id"),
        ("tag_id" = i64, Path, description = "Tag id")
    ),
    responses(
        (status = 204, description = "Tag attached; repeating is a no-op."),
        (status = 404, description = "No such article or tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn add_article_tag(
    Extension(state): Extension<HttpState>,
    Path((id, tag_id)): Path<(i64, i64)>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .add_tag(AddTagCommand {
            article_id: id,
            tag_id,
        })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}/tags/{tag_id}",
    params(
        ("id" = i64, Path, description = "Article id"),
        ("tag_id" = i64, Path, description = "Tag id")
    ),
    responses(
        (status = 204, description = "Tag detached, or was not attached."),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn remove_article_tag(
    Extension(state): Extension<HttpState>,
    Path((id, tag_id)): Path<(i64, i64)>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .remove_tag(RemoveTagCommand {
            article_id: id,
            tag_id,
        })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/revisions",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Revisions, newest first.", body = [ArticleRevisionDto]),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Revisions"
)]
pub async fn list_article_revisions(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<ArticleRevisionDto>>> {
    state
        .services
        .article_queries
        .list_revisions(ListArticleRevisionsQuery { article_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/revisions",
    params(("id" = i64, Path, description = "Article id")),
    request_body = CreateRevisionRequest,
    responses(
        (status = 201, description = "Revision recorded.", body = ArticleRevisionDto),
        (status = 400, description = "Invalid revision.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article or editor.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Revisions"
)]
pub async fn create_article_revision(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateRevisionRequest>,
) -> HttpResult<(StatusCode, Json<ArticleRevisionDto>)> {
    state
        .services
        .article_commands
        .create_revision(CreateRevisionCommand {
            article_id: id,
            editor_id: payload.editor_id,
            title: payload.title,
            body: payload.body,
        })
        .await
        .into_http()
        .map(|revision| (StatusCode::CREATED, Json(revision)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/related",
    params(("id" = i64, Path, description = "Article id"), RelatedParams),
    responses(
        (status = 200, description = "Published articles sharing a category or tag.", body = [ArticleDto]),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn related_articles(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<RelatedParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .related_articles(RelatedArticlesQuery {
            article_id: id,
            limit: params.limit.unwrap_or(0),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/views",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Whether the view was counted.", body = ViewRecordedDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn record_article_view(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    client: ClientInfo,
) -> HttpResult<Json<ViewRecordedDto>> {
    state
        .services
        .article_commands
        .record_view(RecordViewCommand {
            article_id: id,
            client_ip: client.ip,
            user_agent: client.user_agent,
        })
        .await
        .into_http()
        .map(Json)
}
