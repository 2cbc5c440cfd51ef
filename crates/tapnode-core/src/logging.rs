//! Logging facilities for tapnode.
//!
//! tapnode uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; to see logs, install one in the host application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("tapnode::touch=trace,tapnode::button=debug")
//!         .init();
//!
//!     // Host loop...
//! }
//! ```
//!
//! Touch transitions and presentation attach/detach are logged at `trace`,
//! callback dispatch and owner-driven state changes at `debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "tapnode_core";
    /// Target-action dispatch target.
    pub const ACTION: &str = "tapnode_core::action";
    /// Button state register target.
    pub const BUTTON: &str = "tapnode::button";
    /// Touch tracker target.
    pub const TOUCH: &str = "tapnode::touch";
    /// Presentation mapping target.
    pub const PRESENTATION: &str = "tapnode::presentation";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Hosts can wrap a frame's worth of input delivery in a `PerfSpan` to time it.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "tapnode::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace-level log with the core target.
#[macro_export]
macro_rules! tapnode_trace {
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: "tapnode_core", $($arg)*)
    };
}

/// Debug-level log with the core target.
#[macro_export]
macro_rules! tapnode_debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "tapnode_core", $($arg)*)
    };
}
