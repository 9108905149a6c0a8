// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, Page};
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleDto>,
    /// Articles matching the filter across all pages.
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
}

impl From<Page<ArticleDto>> for ArticleListResponse {
    fn from(page: Page<ArticleDto>) -> Self {
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::submit_article,
        crate::presentation::http::controllers::articles::publish_article,
        crate::presentation::http::controllers::articles::reject_article,
        crate::presentation::http::controllers::articles::unpublish_article,
        crate::presentation::http::controllers::articles::return_article_to_draft,
        crate::presentation::http::controllers::articles::update_article_status,
        crate::presentation::http::controllers::articles::list_article_tags,
        crate::presentation::http::controllers::articles::add_article_tag,
        crate::presentation::http::controllers::articles::remove_article_tag,
        crate::presentation::http::controllers::articles::list_article_revisions,
        crate::presentation::http::controllers::articles::create_article_revision,
        crate::presentation::http::controllers::articles::related_articles,
        crate::presentation::http::controllers::articles::record_article_view,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateStatusRequest,
            crate::presentation::http::controllers::articles::CreateRevisionRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleRevisionDto,
            crate::application::dto::TagDto,
            crate::application::dto::ViewRecordedDto
        )
    ),
    tags(
        (name = "Articles", description = "Article storage and queries"),
        (name = "Workflow", description = "Editorial status transitions"),
        (name = "Tags", description = "Article tag associations"),
        (name = "Revisions", description = "Article revision history"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Newsroom API",
        description = "Article publication and query engine",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}
