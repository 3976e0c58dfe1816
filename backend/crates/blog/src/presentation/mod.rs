//! Presentation Layer
//!
//! HTTP handlers, DTOs, validation, extractors, and router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod validation;

pub use router::{blog_router, blog_router_generic};
