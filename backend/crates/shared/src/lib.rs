//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Integer-backed typed IDs for stored entities
//!
//! Only things whose meaning is identical for users, articles and
//! comments belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
