//! Rows and the row store.
//!
//! [`RowStore`] owns every row of a grid and keeps the top-level display
//! order. Rows are addressed two ways:
//!
//! - by [`RowId`], a stable identity that survives reordering, and
//! - by position, which changes whenever rows are sorted, inserted or removed.
//!
//! Each row caches its own position in [`Row::index`]. The store maintains
//! that cache on every mutation, so `store.row_at(i).index() == i` always
//! holds for top-level rows. Sub-rows cache their position under their parent
//! instead and are never reordered by a sort: they travel with the parent.

use slotmap::{SlotMap, new_key_type};

use crate::cell::Cell;

new_key_type! {
    /// Stable identity of a row within a [`RowStore`].
    ///
    /// Unlike a positional index, a `RowId` keeps referring to the same row
    /// after the store is sorted.
    pub struct RowId;
}

/// A grid row: an ordered sequence of cells plus hierarchy links.
#[derive(Debug, Clone)]
pub struct Row {
    cells: Vec<Cell>,
    index: usize,
    parent: Option<RowId>,
    sub_rows: Vec<RowId>,
}

impl Row {
    fn new(cells: Vec<Cell>, index: usize, parent: Option<RowId>) -> Self {
        Self {
            cells,
            index,
            parent,
            sub_rows: Vec::new(),
        }
    }

    /// The cell at `column`, or `None` for sparse rows with fewer cells.
    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }

    /// All cells of the row.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells in the row.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Position of the row: within the store for top-level rows, within the
    /// parent for sub-rows.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The parent row, if this is a sub-row.
    pub fn parent(&self) -> Option<RowId> {
        self.parent
    }

    /// Sub-rows in child order.
    pub fn sub_rows(&self) -> &[RowId] {
        &self.sub_rows
    }

    /// Returns `true` if the row has sub-rows.
    pub fn has_sub_rows(&self) -> bool {
        !self.sub_rows.is_empty()
    }
}

/// Ordered collection of grid rows.
///
/// # Example
///
/// ```
/// use horizon_grid::{Cell, RowStore};
///
/// let mut store = RowStore::new();
/// let first = store.push(vec![Cell::from("b")]);
/// let second = store.push(vec![Cell::from("a")]);
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.index_of(second), Some(1));
/// assert_eq!(store.row_at(0).map(|row| row.index()), Some(0));
/// # let _ = first;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    rows: SlotMap<RowId, Row>,
    order: Vec<RowId>,
}

impl RowStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from row cell sequences, in order.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Cell>,
    {
        let mut store = Self::new();
        for cells in rows {
            store.push(cells.into_iter().collect());
        }
        store
    }

    /// Number of top-level rows.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the store has no top-level rows.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of rows, sub-rows included.
    pub fn total_len(&self) -> usize {
        self.rows.len()
    }

    /// Appends a top-level row and returns its identity.
    pub fn push(&mut self, cells: Vec<Cell>) -> RowId {
        let index = self.order.len();
        let id = self.rows.insert(Row::new(cells, index, None));
        self.order.push(id);
        id
    }

    /// Inserts a top-level row at `index`, shifting later rows down.
    ///
    /// An index past the end appends.
    pub fn insert(&mut self, index: usize, cells: Vec<Cell>) -> RowId {
        let index = index.min(self.order.len());
        let id = self.rows.insert(Row::new(cells, index, None));
        self.order.insert(index, id);
        self.reindex_from(index);
        id
    }

    /// Appends a sub-row under `parent`.
    ///
    /// Returns `None` if `parent` is not in the store.
    pub fn push_sub_row(&mut self, parent: RowId, cells: Vec<Cell>) -> Option<RowId> {
        let child_index = self.rows.get(parent)?.sub_rows.len();
        let id = self.rows.insert(Row::new(cells, child_index, Some(parent)));
        self.rows.get_mut(parent)?.sub_rows.push(id);
        Some(id)
    }

    /// Removes a row together with all of its sub-rows.
    ///
    /// Returns the removed row, or `None` if `id` was not in the store.
    pub fn remove(&mut self, id: RowId) -> Option<Row> {
        let row = self.rows.remove(id)?;
        let mut pending = row.sub_rows.clone();
        while let Some(child) = pending.pop() {
            if let Some(removed) = self.rows.remove(child) {
                pending.extend(removed.sub_rows);
            }
        }

        match row.parent {
            Some(parent) => {
                if let Some(parent_row) = self.rows.get_mut(parent) {
                    parent_row.sub_rows.remove(row.index);
                    let siblings = parent_row.sub_rows.clone();
                    for (position, sibling) in siblings.into_iter().enumerate().skip(row.index) {
                        if let Some(sibling_row) = self.rows.get_mut(sibling) {
                            sibling_row.index = position;
                        }
                    }
                }
            }
            None => {
                self.order.remove(row.index);
                self.reindex_from(row.index);
            }
        }

        tracing::trace!(target: horizon_grid_core::logging::targets::MODEL, ?id, "row removed");
        Some(row)
    }

    /// Removes every row.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.order.clear();
    }

    /// Looks up a row by identity.
    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.get(id)
    }

    /// Looks up a top-level row by position.
    pub fn row_at(&self, index: usize) -> Option<&Row> {
        self.order.get(index).and_then(|&id| self.rows.get(id))
    }

    /// Identity of the top-level row at `index`.
    pub fn id_at(&self, index: usize) -> Option<RowId> {
        self.order.get(index).copied()
    }

    /// Current position of a row: in the store for top-level rows, under the
    /// parent for sub-rows.
    pub fn index_of(&self, id: RowId) -> Option<usize> {
        self.rows.get(id).map(Row::index)
    }

    /// Returns `true` if `id` refers to a row in this store.
    pub fn contains(&self, id: RowId) -> bool {
        self.rows.contains_key(id)
    }

    /// Top-level row identities in display order.
    pub fn ids(&self) -> &[RowId] {
        &self.order
    }

    /// Sub-rows of `parent` in child order.
    pub fn sub_rows(&self, parent: RowId) -> &[RowId] {
        self.rows
            .get(parent)
            .map(|row| row.sub_rows.as_slice())
            .unwrap_or_default()
    }

    /// Iterates top-level rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = (RowId, &Row)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.rows.get(id).map(|row| (id, row)))
    }

    /// Every row in display order: each top-level row followed by its
    /// sub-rows (depth first).
    pub fn display_order(&self) -> Vec<RowId> {
        let mut out = Vec::with_capacity(self.rows.len());
        let mut stack: Vec<RowId> = self.order.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.sub_rows(id).iter().rev().copied());
        }
        out
    }

    /// Replaces the cell at `column` of row `id`, growing the row with empty
    /// cells if it is too short.
    ///
    /// Returns `false` if the row does not exist.
    pub fn set_cell(&mut self, id: RowId, column: usize, cell: Cell) -> bool {
        let Some(row) = self.rows.get_mut(id) else {
            return false;
        };
        if row.cells.len() <= column {
            row.cells.resize_with(column + 1, Cell::new);
        }
        row.cells[column] = cell;
        true
    }

    /// Splits the store into the row table and the mutable top-level order.
    ///
    /// Sort algorithms permute the order slice while comparers read rows.
    /// Callers must finish with [`reindex`](Self::reindex).
    pub(crate) fn split_for_sort(&mut self) -> (&SlotMap<RowId, Row>, &mut [RowId]) {
        (&self.rows, self.order.as_mut_slice())
    }

    /// Rewrites every top-level row's cached index from its position.
    pub(crate) fn reindex(&mut self) {
        self.reindex_from(0);
    }

    fn reindex_from(&mut self, start: usize) {
        for (position, &id) in self.order.iter().enumerate().skip(start) {
            if let Some(row) = self.rows.get_mut(id) {
                row.index = position;
            }
        }
    }
}
