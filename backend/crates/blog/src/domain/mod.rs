//! Domain Layer
//!
//! Contains entities, the article filter, and repository traits.

pub mod entity;
pub mod filter;
pub mod repository;

// Re-exports
pub use entity::{
    article::{Article, ArticleEdit, NewArticle},
    comment::{Comment, NewComment},
    user::{NewUser, User},
};
pub use filter::ArticleFilter;
pub use repository::{ArticleRepository, CommentRepository, UserRepository};
