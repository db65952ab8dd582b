//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging/metrics → Parse templates → Prepare storage → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Trigger (test harness or signal) → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when templates and storage are ready)

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
