//! Blog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, article filter, repository traits
//! - `application/` - Use cases, view assembly, token service
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, validation, router
//!
//! ## Features
//! - User registration and login with bearer tokens (HS256)
//! - Articles with tag / author / favorited filtering
//! - Comments
//! - Listings joined with author profiles, `"Unknown"` for missing authors
//!
//! ## Security Model
//! - Passwords are stored and compared as submitted
//! - Tokens carry `Email` and `UserName` claims and expire after the
//!   configured TTL; there is no revocation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::TokenConfig;
pub use error::{BlogError, BlogResult};
pub use infra::{memory::InMemoryBlogRepository, postgres::PgBlogRepository};
pub use presentation::router::{blog_router, blog_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
