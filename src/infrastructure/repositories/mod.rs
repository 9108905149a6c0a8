// src/infrastructure/repositories/mod.rs
mod articles;
mod error;

pub use articles::{
    PostgresArticleReadRepository, PostgresArticleRevisionRepository,
    PostgresArticleTagRepository, PostgresArticleViewLogRepository,
    PostgresArticleWriteRepository,
};
pub use error::map_sqlx;
