// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod revisions;
mod service;
mod status;
mod tags;
mod update;
mod views;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use revisions::CreateRevisionCommand;
pub use service::ArticleCommandService;
pub use status::{TransitionArticleCommand, UpdateStatusCommand};
pub use tags::{AddTagCommand, RemoveTagCommand};
pub use update::UpdateArticleCommand;
pub use views::RecordViewCommand;
