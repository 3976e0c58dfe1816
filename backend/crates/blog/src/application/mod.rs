//! Application Layer
//!
//! Use cases and application services.

pub mod articles;
pub mod comments;
pub mod config;
pub mod identity;
pub mod token;
pub mod view;

// Re-exports
pub use articles::{ArticleQueryInput, ArticleUseCase};
pub use comments::CommentUseCase;
pub use config::TokenConfig;
pub use identity::{CredentialsInput, CurrentUserOutput, IdentityUseCase};
pub use token::{TokenClaims, TokenIdentity, TokenService};
pub use view::{ArticleView, AuthorData, CommentView};
