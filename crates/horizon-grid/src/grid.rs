//! Grid model: rows, columns and sort state in one place.
//!
//! [`GridModel`] is what a table control holds on to. It owns the row store
//! and column model, remembers which column is sorted, keeps the anchor
//! (focused) row, and turns header clicks into sort calls.
//!
//! # Example
//!
//! ```
//! use horizon_grid::{Cell, Column, ColumnKind, GridModel, SortOrder};
//!
//! let mut grid = GridModel::new([
//!     Column::new("Name", ColumnKind::Text),
//!     Column::new("Size", ColumnKind::Number),
//! ]);
//! grid.store_mut().push(vec![Cell::from("beta"), Cell::from(20)]);
//! let alpha = grid.store_mut().push(vec![Cell::from("alpha"), Cell::from(10)]);
//! grid.set_anchor(Some(alpha));
//!
//! // First click: ascending. Second click on the same header: descending.
//! grid.toggle_sort(0);
//! assert_eq!(grid.active_sort(), Some((0, SortOrder::Ascending)));
//! assert_eq!(grid.anchor_index(), Some(0));
//!
//! grid.toggle_sort(0);
//! assert_eq!(grid.active_sort(), Some((0, SortOrder::Descending)));
//! assert_eq!(grid.anchor_index(), Some(1));
//! ```

use crate::column::{Column, ColumnModel, SortOrder};
use crate::row::{RowId, RowStore};
use crate::sort::{self, SecondarySortOrders, SortConfig, SortReport, SortRequest, SortSignals};

/// Rows, columns and sort state of one grid.
#[derive(Debug, Default)]
pub struct GridModel {
    store: RowStore,
    columns: ColumnModel,
    signals: SortSignals,
    config: SortConfig,
    secondary: SecondarySortOrders,
    active: Option<(usize, SortOrder)>,
    anchor: Option<RowId>,
}

impl GridModel {
    /// Creates an empty grid with the given columns.
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Creates a grid from an existing store and column model.
    pub fn from_parts(store: RowStore, columns: ColumnModel) -> Self {
        Self {
            store,
            columns,
            ..Self::default()
        }
    }

    /// Sets the sort configuration.
    pub fn with_config(mut self, config: SortConfig) -> Self {
        self.config = config;
        self
    }

    /// The rows.
    pub fn store(&self) -> &RowStore {
        &self.store
    }

    /// Mutable access to the rows.
    ///
    /// Editing rows invalidates the current order; call
    /// [`resort`](Self::resort) to restore it.
    pub fn store_mut(&mut self) -> &mut RowStore {
        &mut self.store
    }

    /// The columns.
    pub fn columns(&self) -> &ColumnModel {
        &self.columns
    }

    /// Mutable access to the columns.
    pub fn columns_mut(&mut self) -> &mut ColumnModel {
        &mut self.columns
    }

    /// Sort notifications.
    pub fn signals(&self) -> &SortSignals {
        &self.signals
    }

    /// The sort configuration.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Replaces the sort configuration.
    pub fn set_config(&mut self, config: SortConfig) {
        self.config = config;
    }

    /// Tie-break keys applied to every sort this grid starts.
    pub fn secondary_sort_orders(&self) -> &SecondarySortOrders {
        &self.secondary
    }

    /// Mutable access to the tie-break keys.
    pub fn secondary_sort_orders_mut(&mut self) -> &mut SecondarySortOrders {
        &mut self.secondary
    }

    /// The sorted column and its direction, as of the last sort.
    pub fn active_sort(&self) -> Option<(usize, SortOrder)> {
        self.active
    }

    /// The anchor (focused) row.
    pub fn anchor(&self) -> Option<RowId> {
        self.anchor
    }

    /// Sets the anchor row. Its position is tracked across sorts.
    pub fn set_anchor(&mut self, anchor: Option<RowId>) {
        self.anchor = anchor;
    }

    /// Current position of the anchor row.
    pub fn anchor_index(&self) -> Option<usize> {
        self.anchor.and_then(|id| self.store.index_of(id))
    }

    /// Sorts by `column` in `order` with the grid's configuration and
    /// tie-break keys.
    pub fn sort_by_column(&mut self, column: usize, order: SortOrder) -> Option<SortReport> {
        let mut request = SortRequest::with_config(column, order, &self.config)
            .with_secondary_orders(self.secondary.clone());
        request.anchor = self.anchor;
        self.sort_with(&request)
    }

    /// Runs an explicit request. The anchor in the request, if any, replaces
    /// the grid's anchor.
    pub fn sort_with(&mut self, request: &SortRequest) -> Option<SortReport> {
        let report = sort::sort(
            &mut self.store,
            &mut self.columns,
            request,
            Some(&self.signals),
        )?;
        self.active = Some((report.column, report.direction));
        if request.anchor.is_some() {
            self.anchor = request.anchor;
        }
        Some(report)
    }

    /// Header click: the active column flips direction, any other column
    /// sorts ascending.
    pub fn toggle_sort(&mut self, column: usize) -> Option<SortReport> {
        let order = match self.active {
            Some((active, order)) if active == column => order.reversed(),
            _ => SortOrder::Ascending,
        };
        self.sort_by_column(column, order)
    }

    /// Re-applies the active sort, e.g. after rows were edited.
    pub fn resort(&mut self) -> Option<SortReport> {
        let (column, order) = self.active?;
        self.sort_by_column(column, order)
    }
}
