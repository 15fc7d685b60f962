//! Horizon Grid - row storage and sorting for table controls.
//!
//! This crate holds the ordering side of a spreadsheet-like grid: rows of
//! typed cells, column descriptors, pluggable comparers, and a sort
//! orchestrator that picks between insertion, shell, merge and heap sort.
//! Rendering, input and editing live in the widget layer; it hands rows in
//! and reads the reordered rows back out.
//!
//! # Modules
//!
//! - [`cell`]: cell values (`Cell`, `CellData`)
//! - [`row`]: rows and the row store (`Row`, `RowId`, `RowStore`)
//! - [`column`]: column descriptors (`Column`, `ColumnKind`, `SortOrder`)
//! - [`comparer`]: row comparers and the comparer chain
//! - [`sort`]: algorithms, algorithm selection and the sort orchestrator
//! - [`grid`]: `GridModel`, which tracks the active sort and anchor row
//!
//! # Example
//!
//! ```
//! use horizon_grid::prelude::*;
//!
//! let mut grid = GridModel::new([
//!     Column::new("Item", ColumnKind::Text),
//!     Column::new("Price", ColumnKind::Number),
//! ]);
//! for (item, price) in [("pear", 3.5), ("apple", 1.25), ("fig", 3.5)] {
//!     grid.store_mut().push(vec![Cell::from(item), Cell::from(price)]);
//! }
//!
//! grid.secondary_sort_orders_mut().push(0, SortOrder::Ascending);
//! grid.sort_by_column(1, SortOrder::Descending);
//!
//! let items: Vec<_> = grid
//!     .store()
//!     .iter()
//!     .filter_map(|(_, row)| row.cell(0)?.text())
//!     .collect();
//! assert_eq!(items, ["fig", "pear", "apple"]);
//! ```

pub mod cell;
pub mod column;
pub mod comparer;
mod error;
pub mod grid;
pub mod prelude;
pub mod row;
pub mod sort;

pub use cell::{Cell, CellData, CheckState};
pub use column::{Column, ColumnKind, ColumnModel, SortOrder};
pub use comparer::{ComparerChain, ComparerFactory, RowComparer, ValueComparer};
pub use error::{Result, SortError};
pub use grid::GridModel;
pub use row::{Row, RowId, RowStore};
pub use sort::{
    SecondarySortOrders, SortAlgorithm, SortConfig, SortReport, SortRequest, SortSignals, SortType,
};

pub use horizon_grid_core::{ConnectionId, PerfSpan, Signal};
