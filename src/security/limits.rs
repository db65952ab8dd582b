//! Request limits.
//!
//! # Responsibilities
//! - Enforce maximum request body size (form posts to `/save/`)
//!
//! # Design Decisions
//! - The limit applies when a handler reads the body, not on arrival, so the save
//!   handler rejects an invalid title with 404 before any body is consumed
//! - Reading past the limit is a 413 from the form or multipart extractor

use axum::extract::DefaultBodyLimit;

use crate::config::schema::SecurityConfig;

/// Body limit layer for the configured maximum.
pub fn body_limit_layer(config: &SecurityConfig) -> DefaultBodyLimit {
    DefaultBodyLimit::max(config.max_body_size)
}
