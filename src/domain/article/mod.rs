pub mod entity;
pub mod filter;
pub mod page;
pub mod repository;
pub mod revision;
pub mod services;
pub mod sort;
pub mod status;
pub mod value_objects;
pub mod view;

pub use entity::{Article, ArticleUpdate, NewArticle, StatusChange};
pub use filter::{ArticleFilter, ArticlePredicate};
pub use page::{ArticlePage, PageRequest};
pub use repository::{
    ArticleReadRepository, ArticleRevisionRepository, ArticleTagRepository,
    ArticleViewLogRepository, ArticleWriteRepository,
};
pub use revision::{ArticleRevision, NewArticleRevision};
pub use sort::{SortDirection, SortField, SortKey, SortSpec};
pub use status::{ArticleStatus, ArticleTransition, WorkflowPolicy};
pub use value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle};
pub use view::ArticleView;
