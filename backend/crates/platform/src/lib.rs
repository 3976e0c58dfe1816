//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations with no blog
//! vocabulary in them:
//! - Signed bearer token encoding/decoding (HS256)
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod token;
