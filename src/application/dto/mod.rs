pub mod articles;
pub mod pagination;
pub mod serde_time;

pub use articles::{ArticleDto, ArticleRevisionDto, TagDto, ViewRecordedDto};
pub use pagination::Page;
