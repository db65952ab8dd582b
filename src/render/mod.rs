//! Template rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     templates dir (or built-in sources)
//!     → template.rs (parse view/edit once)
//!     → TemplateSet (immutable, owned by server state)
//!
//! Per request:
//!     handler → TemplateSet::render(name, &Page) → HTML string
//! ```

pub mod template;

pub use template::{Template, TemplateError, TemplateSet};
