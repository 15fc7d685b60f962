//! Prelude module for Horizon Grid.
//!
//! ```
//! use horizon_grid::prelude::*;
//! ```

pub use crate::cell::{Cell, CellData, CheckState};
pub use crate::column::{Column, ColumnKind, ColumnModel, SortOrder};
pub use crate::comparer::{ComparerFactory, RowComparer};
pub use crate::grid::GridModel;
pub use crate::row::{Row, RowId, RowStore};
pub use crate::sort::{
    SecondarySortOrders, SortAlgorithm, SortConfig, SortReport, SortRequest, SortType,
};
pub use horizon_grid_core::Signal;
