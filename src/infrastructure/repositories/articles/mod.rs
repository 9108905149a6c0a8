mod postgres;
mod query;
mod revision;
mod tags;
mod views;

pub use postgres::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use revision::PostgresArticleRevisionRepository;
pub use tags::PostgresArticleTagRepository;
pub use views::PostgresArticleViewLogRepository;
