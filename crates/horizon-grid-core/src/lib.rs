//! Core systems for Horizon Grid.
//!
//! This crate provides the foundational pieces shared by the grid crates:
//!
//! - **Signals**: synchronous change notifications ([`Signal`])
//! - **Logging**: `tracing` targets, span names and the [`PerfSpan`] guard
//!
//! # Signal Example
//!
//! ```
//! use horizon_grid_core::Signal;
//!
//! let rows_reordered = Signal::<usize>::new();
//! rows_reordered.connect(|count| println!("{count} rows reordered"));
//! rows_reordered.emit(12);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};

#[doc(hidden)]
pub use tracing;
