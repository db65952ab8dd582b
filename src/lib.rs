//! Minimal page wiki library.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod routing;
pub mod security;
pub mod storage;

pub use config::WikiConfig;
pub use error::WikiError;
pub use http::WikiServer;
pub use lifecycle::Shutdown;
