//! Logging facilities for daygrid.
//!
//! daygrid uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the host application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("daygrid=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every subsystem logs under a fixed target from [`targets`], so hosts can
//! filter precisely, e.g. `RUST_LOG=daygrid::layout=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "daygrid_core::signal";
    /// Grid builder target.
    pub const GRID: &str = "daygrid::grid";
    /// Layout engine target.
    pub const LAYOUT: &str = "daygrid::layout";
    /// Selection and navigation target.
    pub const SELECTION: &str = "daygrid::selection";
    /// Widget event handling and painting target.
    pub const WIDGET: &str = "daygrid::widget";
    /// Configuration loading target.
    pub const CONFIG: &str = "daygrid::config";
    /// Performance spans target.
    pub const PERF: &str = "daygrid::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for measuring how long a grid rebuild or a paint pass takes.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "daygrid::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
