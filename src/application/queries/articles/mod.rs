mod get_by_id;
mod get_by_slug;
mod list;
mod related;
mod revisions;
mod service;
mod tags;

pub use get_by_id::GetArticleByIdQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesQuery;
pub use related::RelatedArticlesQuery;
pub use revisions::ListArticleRevisionsQuery;
pub use service::ArticleQueryService;
pub use tags::ListArticleTagsQuery;
