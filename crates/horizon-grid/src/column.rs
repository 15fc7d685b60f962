//! Column descriptors.
//!
//! A [`Column`] carries the metadata sorting needs: whether it is sortable,
//! which comparer orders it, and its current [`SortOrder`]. The column's
//! position in the [`ColumnModel`] is also its index into every row's cells.

use std::fmt;

use crate::comparer::ComparerFactory;

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Not sorted.
    #[default]
    None,
    /// Ascending order (A-Z, 0-9).
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl SortOrder {
    /// Returns `true` for `Ascending` or `Descending`.
    pub fn is_sorted(&self) -> bool {
        !matches!(self, SortOrder::None)
    }

    /// The opposite direction. `None` stays `None`.
    pub fn reversed(&self) -> SortOrder {
        match self {
            SortOrder::None => SortOrder::None,
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Applies this direction to an ascending comparison result.
    #[inline]
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Descending => ordering.reverse(),
            SortOrder::Ascending | SortOrder::None => ordering,
        }
    }
}

/// What a column displays. Determines the default comparer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnKind {
    /// Plain text, ordered by display text.
    #[default]
    Text,
    /// Generic column ordered by typed data, falling back to text.
    Data,
    /// Numeric values.
    Number,
    /// Calendar dates and times.
    DateTime,
    /// Check boxes.
    CheckBox,
    /// Color swatches.
    Color,
    /// Images, optionally with a caption.
    Image,
    /// Progress bars (numeric values).
    Progress,
    /// Owner-drawn content with no intrinsic ordering. Sortable only with an
    /// explicit comparer.
    Custom,
}

/// A column descriptor.
///
/// # Example
///
/// ```
/// use horizon_grid::{Column, ColumnKind, SortOrder};
///
/// let column = Column::new("Price", ColumnKind::Number);
/// assert!(column.is_sortable());
/// assert_eq!(column.sort_order(), SortOrder::None);
///
/// let fixed = Column::new("Actions", ColumnKind::Image).with_sortable(false);
/// assert!(!fixed.is_sortable());
/// ```
#[derive(Clone)]
pub struct Column {
    title: String,
    kind: ColumnKind,
    sortable: bool,
    comparer: Option<ComparerFactory>,
    sort_order: SortOrder,
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("title", &self.title)
            .field("kind", &self.kind)
            .field("sortable", &self.sortable)
            .field("custom_comparer", &self.comparer.is_some())
            .field("sort_order", &self.sort_order)
            .finish()
    }
}

impl Column {
    /// Creates a sortable column of the given kind.
    pub fn new(title: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            title: title.into(),
            kind,
            sortable: true,
            comparer: None,
            sort_order: SortOrder::None,
        }
    }

    /// Sets whether clicking this column may sort the grid.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Overrides the comparer derived from the column kind.
    pub fn with_comparer(mut self, factory: ComparerFactory) -> Self {
        self.comparer = Some(factory);
        self
    }

    /// The column title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The column kind.
    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Returns `true` if the column may be sorted.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Sets whether the column may be sorted.
    pub fn set_sortable(&mut self, sortable: bool) {
        self.sortable = sortable;
    }

    /// The comparer override, if one was set.
    pub fn comparer(&self) -> Option<&ComparerFactory> {
        self.comparer.as_ref()
    }

    /// Replaces the comparer override. `None` restores the kind default.
    pub fn set_comparer(&mut self, factory: Option<ComparerFactory>) {
        self.comparer = factory;
    }

    /// The comparer used for sorting: the override, else the kind default.
    pub fn resolve_comparer(&self) -> Option<ComparerFactory> {
        self.comparer
            .clone()
            .or_else(|| self.kind.default_comparer())
    }

    /// Current sort direction. Maintained by the sort orchestrator.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub(crate) fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }
}

/// Ordered collection of column descriptors.
#[derive(Debug, Clone, Default)]
pub struct ColumnModel {
    columns: Vec<Column>,
}

impl ColumnModel {
    /// Creates an empty column model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column and returns its index.
    pub fn push(&mut self, column: Column) -> usize {
        self.columns.push(column);
        self.columns.len() - 1
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The column at `index`.
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Mutable access to the column at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.get_mut(index)
    }

    /// Iterates columns in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    /// Returns `true` if `index` names a column that can be sorted.
    pub fn is_valid_sort_column(&self, index: usize) -> bool {
        self.columns
            .get(index)
            .is_some_and(|column| column.is_sortable() && column.resolve_comparer().is_some())
    }

    /// The column currently carrying a sort direction, if any.
    pub fn sorted_column(&self) -> Option<(usize, SortOrder)> {
        self.columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.sort_order.is_sorted())
            .map(|(index, column)| (index, column.sort_order))
    }

    /// Makes `index` the only sorted column. Returns the previously sorted
    /// column if it was a different one.
    pub(crate) fn mark_sorted(&mut self, index: usize, order: SortOrder) -> Option<usize> {
        let mut previous = None;
        for (position, column) in self.columns.iter_mut().enumerate() {
            if position == index {
                column.set_sort_order(order);
            } else if column.sort_order.is_sorted() {
                column.set_sort_order(SortOrder::None);
                previous = Some(position);
            }
        }
        previous
    }
}

impl FromIterator<Column> for ColumnModel {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
