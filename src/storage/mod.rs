//! Page persistence subsystem.
//!
//! # Data Flow
//! ```text
//! title (validated)
//!     → store.rs (title + ".txt" inside the storage directory)
//!     → page.rs (Page { title, body })
//! ```

pub mod page;
pub mod store;

pub use page::Page;
pub use store::PageStore;
