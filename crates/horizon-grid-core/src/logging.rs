//! Logging facilities for Horizon Grid.
//!
//! Horizon Grid uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_grid::sort=debug")
//!         .init();
//! }
//! ```
//!
//! The [`targets`] constants can be used in filter directives to enable a
//! single subsystem.

use std::time::Instant;

/// Span names used throughout Horizon Grid for tracing.
pub mod span_names {
    /// A complete sort call, from validation to anchor re-resolution.
    pub const SORT: &str = "horizon_grid::sort";
    /// Performance measurement span.
    pub const PERF: &str = "horizon_grid::perf";
}

/// Target names for log filtering.
pub mod targets {
    /// Signal emission target.
    pub const SIGNAL: &str = "horizon_grid_core::signal";
    /// Sorting subsystem target.
    pub const SORT: &str = "horizon_grid::sort";
    /// Row store and column model target.
    pub const MODEL: &str = "horizon_grid::model";
}

/// Performance tracing guard.
///
/// Enters an info-level span for `operation` and, when dropped, records the
/// elapsed wall time at debug level.
///
/// ```
/// use horizon_grid_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("merge_sort");
///     // timed work
/// }
/// ```
#[derive(Debug)]
pub struct PerfSpan {
    operation: &'static str,
    started: Instant,
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::info_span!(target: span_names::PERF, "perf", operation);
        Self {
            operation,
            started: Instant::now(),
            span: span.entered(),
        }
    }

    /// Time elapsed since the span was entered.
    pub fn elapsed(&self) -> std::time::Duration {
        self.started.elapsed()
    }
}

impl Drop for PerfSpan {
    fn drop(&mut self) {
        tracing::debug!(
            target: span_names::PERF,
            operation = self.operation,
            elapsed_us = self.started.elapsed().as_micros() as u64,
            "operation finished"
        );
    }
}

/// Trace-level event with the sorting target.
#[macro_export]
macro_rules! grid_trace {
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: $crate::logging::targets::SORT, $($arg)*)
    };
}

/// Debug-level event with the sorting target.
#[macro_export]
macro_rules! grid_debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: $crate::logging::targets::SORT, $($arg)*)
    };
}
