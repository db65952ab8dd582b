//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → axum router (prefix: /view/, /edit/, /save/)
//!     → validator.rs (full-path allow-list match)
//!     → Return: PageRoute { action, title } or InvalidTitle
//! ```
//!
//! # Design Decisions
//! - Validator compiled at startup, immutable at runtime
//! - axum only dispatches on prefix; the validator is the sole authority on titles
//! - Deterministic: same path always yields the same title

pub mod validator;

pub use validator::{Action, PageRoute, TitleValidator};
