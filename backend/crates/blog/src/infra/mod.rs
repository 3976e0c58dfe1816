//! Infrastructure Layer
//!
//! Repository implementations: PostgreSQL for deployments, in-memory for
//! tests and local experiments.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryBlogRepository;
pub use postgres::PgBlogRepository;
