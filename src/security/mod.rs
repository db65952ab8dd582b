//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits.rs (body size)
//!     → routing::validator (path allow-list, in handlers)
//! Outgoing response:
//!     → headers.rs (CSP, nosniff, frame options)
//! ```
//!
//! # Design Decisions
//! - Fail closed: anything outside the page path pattern is a 404
//! - No trust in client input; page bodies are escaped at render time

pub mod headers;
pub mod limits;
