//! Row sorting.
//!
//! [`sort`] reorders a [`RowStore`] by a primary column with optional
//! secondary tie-break columns. It picks one of four algorithms:
//!
//! | `stable` | rows < threshold | rows >= threshold |
//! |----------|------------------|-------------------|
//! | `true`   | insertion sort   | merge sort        |
//! | `false`  | shell sort       | heap sort         |
//!
//! unless the request names an algorithm explicitly. Afterwards every row's
//! cached index matches its new position, and the optional anchor row (the
//! focused row, typically) is reported at its new index.
//!
//! # Example
//!
//! ```
//! use horizon_grid::sort::{self, SortRequest};
//! use horizon_grid::{Cell, Column, ColumnKind, ColumnModel, RowStore, SortOrder};
//!
//! let mut columns: ColumnModel = [
//!     Column::new("Name", ColumnKind::Text),
//!     Column::new("Qty", ColumnKind::Number),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut store = RowStore::from_rows([
//!     vec![Cell::from("b"), Cell::from(1)],
//!     vec![Cell::from("a"), Cell::from(2)],
//!     vec![Cell::from("b"), Cell::from(0)],
//! ]);
//! let focused = store.id_at(2).unwrap();
//!
//! let request = SortRequest::new(0, SortOrder::Ascending)
//!     .with_secondary(1, SortOrder::Ascending)
//!     .with_anchor(focused);
//! let report = sort::sort(&mut store, &mut columns, &request, None).unwrap();
//!
//! assert_eq!(report.anchor_index, Some(1));
//! assert_eq!(columns.get(0).unwrap().sort_order(), SortOrder::Ascending);
//! ```

mod config;
mod heap;
mod insertion;
mod merge;
mod shell;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use horizon_grid_core::logging::{span_names, targets};
use horizon_grid_core::{PerfSpan, Signal, grid_debug, grid_trace};
use serde::{Deserialize, Serialize};

use crate::column::{ColumnModel, SortOrder};
use crate::comparer::ComparerChain;
use crate::error::SortError;
use crate::row::{RowId, RowStore};

pub use config::SortConfig;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use shell::shell_sort;

/// Row count at which automatic selection switches to O(n log n) algorithms.
pub const DEFAULT_ROW_COUNT_THRESHOLD: usize = 1000;

/// A concrete sort algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// Stable, O(n²). Small inputs.
    InsertionSort,
    /// Unstable, gap-based. Small to medium inputs.
    ShellSort,
    /// Stable, O(n log n), O(n) extra memory. Large inputs.
    MergeSort,
    /// Unstable, O(n log n), in place. Large inputs.
    HeapSort,
}

impl SortAlgorithm {
    /// Returns `true` if equal elements keep their relative order.
    pub fn is_stable(&self) -> bool {
        matches!(self, SortAlgorithm::InsertionSort | SortAlgorithm::MergeSort)
    }

    /// The stable algorithm for the same input size class.
    pub fn stabilized(&self) -> SortAlgorithm {
        match self {
            SortAlgorithm::ShellSort => SortAlgorithm::InsertionSort,
            SortAlgorithm::HeapSort => SortAlgorithm::MergeSort,
            stable => *stable,
        }
    }

    /// Sorts `v` with this algorithm.
    pub fn sort_by<T, F>(&self, v: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            SortAlgorithm::InsertionSort => insertion_sort(v, compare),
            SortAlgorithm::ShellSort => shell_sort(v, compare),
            SortAlgorithm::MergeSort => merge_sort(v, compare),
            SortAlgorithm::HeapSort => heap_sort(v, compare),
        }
    }
}

/// Algorithm selector for a sort request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SortType {
    /// Choose by row count and the stability requirement.
    #[default]
    Auto,
    /// Always heap sort.
    HeapSort,
    /// Always insertion sort.
    InsertionSort,
    /// Always merge sort.
    MergeSort,
    /// Always shell sort.
    ShellSort,
}

impl SortType {
    /// Resolves the selector to a concrete algorithm.
    ///
    /// `Auto` compares `row_count` against `threshold`. An explicit unstable
    /// algorithm combined with `stable = true` is replaced by the stable
    /// algorithm of the same size class, so stability is never dropped.
    ///
    /// ```
    /// use horizon_grid::{SortAlgorithm, SortType};
    ///
    /// assert_eq!(SortType::Auto.resolve(999, true, 1000), SortAlgorithm::InsertionSort);
    /// assert_eq!(SortType::Auto.resolve(1001, true, 1000), SortAlgorithm::MergeSort);
    /// assert_eq!(SortType::HeapSort.resolve(10, false, 1000), SortAlgorithm::HeapSort);
    /// ```
    pub fn resolve(&self, row_count: usize, stable: bool, threshold: usize) -> SortAlgorithm {
        let small = row_count < threshold;
        let algorithm = match self {
            SortType::Auto => match (stable, small) {
                (true, true) => SortAlgorithm::InsertionSort,
                (true, false) => SortAlgorithm::MergeSort,
                (false, true) => SortAlgorithm::ShellSort,
                (false, false) => SortAlgorithm::HeapSort,
            },
            SortType::HeapSort => SortAlgorithm::HeapSort,
            SortType::InsertionSort => SortAlgorithm::InsertionSort,
            SortType::MergeSort => SortAlgorithm::MergeSort,
            SortType::ShellSort => SortAlgorithm::ShellSort,
        };
        if stable { algorithm.stabilized() } else { algorithm }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortType::Auto => "auto",
            SortType::HeapSort => "heap-sort",
            SortType::InsertionSort => "insertion-sort",
            SortType::MergeSort => "merge-sort",
            SortType::ShellSort => "shell-sort",
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortType {
    type Err = SortError;

    /// Accepts `auto`, `heap`, `insertion`, `merge` and `shell`, with an
    /// optional `-sort`/`_sort`/`sort` suffix, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let name = normalized.strip_suffix("sort").unwrap_or(&normalized);
        match name {
            "auto" => Ok(SortType::Auto),
            "heap" => Ok(SortType::HeapSort),
            "insertion" => Ok(SortType::InsertionSort),
            "merge" => Ok(SortType::MergeSort),
            "shell" => Ok(SortType::ShellSort),
            _ => Err(SortError::unknown_sort_type(s)),
        }
    }
}

impl TryFrom<String> for SortType {
    type Error = SortError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<u32> for SortType {
    type Error = SortError;

    /// Integer codes in declaration order: 0 = auto, 1 = heap, 2 = insertion,
    /// 3 = merge, 4 = shell.
    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SortType::Auto),
            1 => Ok(SortType::HeapSort),
            2 => Ok(SortType::InsertionSort),
            3 => Ok(SortType::MergeSort),
            4 => Ok(SortType::ShellSort),
            other => Err(SortError::unknown_sort_type(other.to_string())),
        }
    }
}

impl From<SortType> for &'static str {
    fn from(sort_type: SortType) -> Self {
        sort_type.as_str()
    }
}

/// Ordered tie-break keys: `(column index, direction)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondarySortOrders {
    orders: Vec<(usize, SortOrder)>,
}

impl SecondarySortOrders {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tie-break key.
    pub fn push(&mut self, column: usize, order: SortOrder) {
        self.orders.push((column, order));
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.orders.clear();
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns `true` if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterates keys in application order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, SortOrder)> + '_ {
        self.orders.iter().copied()
    }
}

impl FromIterator<(usize, SortOrder)> for SecondarySortOrders {
    fn from_iter<I: IntoIterator<Item = (usize, SortOrder)>>(iter: I) -> Self {
        Self {
            orders: iter.into_iter().collect(),
        }
    }
}

/// Parameters of one sort call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    /// Primary column index.
    pub column: usize,
    /// Primary direction. `SortOrder::None` makes the call a no-op.
    pub direction: SortOrder,
    /// Tie-break keys.
    pub secondary: SecondarySortOrders,
    /// Whether equal rows must keep their relative order.
    pub stable: bool,
    /// Algorithm selector.
    pub sort_type: SortType,
    /// Row count at which `Auto` switches algorithms.
    pub threshold: usize,
    /// Row whose new position is reported back.
    pub anchor: Option<RowId>,
}

impl SortRequest {
    /// Creates a stable, automatically dispatched request.
    pub fn new(column: usize, direction: SortOrder) -> Self {
        Self::with_config(column, direction, &SortConfig::default())
    }

    /// Creates a request using a grid's configured defaults.
    pub fn with_config(column: usize, direction: SortOrder, config: &SortConfig) -> Self {
        Self {
            column,
            direction,
            secondary: SecondarySortOrders::new(),
            stable: config.stable,
            sort_type: config.sort_type,
            threshold: config.threshold,
            anchor: None,
        }
    }

    /// Appends a tie-break key.
    pub fn with_secondary(mut self, column: usize, order: SortOrder) -> Self {
        self.secondary.push(column, order);
        self
    }

    /// Replaces all tie-break keys.
    pub fn with_secondary_orders(mut self, orders: SecondarySortOrders) -> Self {
        self.secondary = orders;
        self
    }

    /// Sets the stability requirement.
    pub fn stable(mut self, stable: bool) -> Self {
        self.stable = stable;
        self
    }

    /// Selects the algorithm explicitly.
    pub fn with_sort_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = sort_type;
        self
    }

    /// Sets the automatic selection threshold.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the anchor row.
    pub fn with_anchor(mut self, anchor: RowId) -> Self {
        self.anchor = Some(anchor);
        self
    }
}

/// Outcome of a sort that ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    /// The column now sorted.
    pub column: usize,
    /// Its direction.
    pub direction: SortOrder,
    /// A different column that was sorted before this call, now reset.
    pub previous_column: Option<usize>,
    /// The algorithm that ran.
    pub algorithm: SortAlgorithm,
    /// Number of top-level rows reordered.
    pub row_count: usize,
    /// New index of the anchor row, if one was given and is still present.
    pub anchor_index: Option<usize>,
}

/// Notifications around a sort, carrying `(column, direction)`.
#[derive(Debug, Default)]
pub struct SortSignals {
    /// Emitted after validation, before any comparer is built.
    pub sort_beginning: Signal<(usize, SortOrder)>,
    /// Emitted after the rows are reordered and the anchor is resolved.
    pub sort_ended: Signal<(usize, SortOrder)>,
}

impl SortSignals {
    /// Creates signals with no connections.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Sorts the top-level rows of `store` in place.
///
/// Returns `None` without touching the store or the columns when the request
/// names a missing column, an unsortable column, a column without a
/// comparer, or `SortOrder::None`. Sub-rows are not reordered; they stay
/// attached to their parent.
///
/// Secondary keys that name an unusable column or `SortOrder::None` are
/// skipped.
///
/// The column model is updated and `sort_beginning` is emitted before any
/// comparison runs. A panicking comparer unwinds out of this call with the
/// new sort indicator already set, the rows in an unspecified order and
/// `sort_ended` not emitted.
pub fn sort(
    store: &mut RowStore,
    columns: &mut ColumnModel,
    request: &SortRequest,
    signals: Option<&SortSignals>,
) -> Option<SortReport> {
    let column = request.column;
    let direction = request.direction;

    if !direction.is_sorted() {
        grid_debug!(column, "sort skipped: no direction");
        return None;
    }
    let Some(primary) = columns
        .get(column)
        .filter(|c| c.is_sortable())
        .and_then(|c| c.resolve_comparer())
    else {
        grid_debug!(column, "sort skipped: column missing, unsortable or without comparer");
        return None;
    };

    let _perf = PerfSpan::new("sort");
    let _span = tracing::debug_span!(
        target: targets::SORT,
        span_names::SORT,
        column,
        ?direction,
        rows = store.len()
    )
    .entered();

    let previous_column = columns.mark_sorted(column, direction);
    if let Some(signals) = signals {
        signals.sort_beginning.emit((column, direction));
    }

    let mut chain = ComparerChain::new(primary(column, direction));
    for (secondary, order) in request.secondary.iter() {
        let factory = columns
            .get(secondary)
            .filter(|c| c.is_sortable() && order.is_sorted())
            .and_then(|c| c.resolve_comparer());
        match factory {
            Some(factory) => chain.push(factory(secondary, order)),
            None => grid_debug!(secondary, ?order, "secondary sort key skipped"),
        }
    }

    let row_count = store.len();
    let algorithm = request
        .sort_type
        .resolve(row_count, request.stable, request.threshold);
    let anchor = request.anchor.filter(|&id| store.contains(id));
    grid_trace!(?algorithm, keys = chain.len(), "running sort");

    {
        let (rows, order) = store.split_for_sort();
        algorithm.sort_by(order, |a, b| match (rows.get(*a), rows.get(*b)) {
            (Some(a), Some(b)) => chain.compare(a, b),
            _ => Ordering::Equal,
        });
    }
    store.reindex();

    let anchor_index = anchor.and_then(|id| store.index_of(id));
    if let Some(signals) = signals {
        signals.sort_ended.emit((column, direction));
    }

    tracing::debug!(target: targets::SORT, ?algorithm, row_count, ?anchor_index, "sort finished");
    Some(SortReport {
        column,
        direction,
        previous_column,
        algorithm,
        row_count,
        anchor_index,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::cell::Cell;
    use crate::column::{Column, ColumnKind};

    fn letter_number_grid(rows: &[(&str, i64)]) -> (RowStore, ColumnModel) {
        let store = RowStore::from_rows(
            rows.iter()
                .map(|(letter, number)| vec![Cell::from(*letter), Cell::from(*number)]),
        );
        let columns = [
            Column::new("Letter", ColumnKind::Text),
            Column::new("Number", ColumnKind::Number),
        ]
        .into_iter()
        .collect();
        (store, columns)
    }

    fn contents(store: &RowStore) -> Vec<(String, i64)> {
        store
            .iter()
            .map(|(_, row)| {
                let letter = row.cell(0).and_then(Cell::text).unwrap_or_default().to_string();
                let number = row.cell(1).and_then(Cell::data).and_then(|d| d.as_int()).unwrap_or(-1);
                (letter, number)
            })
            .collect()
    }

    fn owned(rows: &[(&str, i64)]) -> Vec<(String, i64)> {
        rows.iter().map(|(l, n)| (l.to_string(), *n)).collect()
    }

    #[test]
    fn test_stable_ascending_example() {
        let (mut store, mut columns) = letter_number_grid(&[("b", 1), ("a", 2), ("b", 0)]);
        let report = sort(
            &mut store,
            &mut columns,
            &SortRequest::new(0, SortOrder::Ascending),
            None,
        )
        .unwrap();
        assert_eq!(report.algorithm, SortAlgorithm::InsertionSort);
        assert_eq!(contents(&store), owned(&[("a", 2), ("b", 1), ("b", 0)]));
    }

    #[test]
    fn test_stable_descending_example() {
        let (mut store, mut columns) = letter_number_grid(&[("b", 1), ("a", 2), ("b", 0)]);
        sort(
            &mut store,
            &mut columns,
            &SortRequest::new(0, SortOrder::Descending),
            None,
        )
        .unwrap();
        assert_eq!(contents(&store), owned(&[("b", 1), ("b", 0), ("a", 2)]));
    }

    #[test]
    fn test_secondary_key_breaks_ties() {
        let (mut store, mut columns) = letter_number_grid(&[("b", 1), ("a", 2), ("b", 0)]);
        let request = SortRequest::new(0, SortOrder::Ascending).with_secondary(1, SortOrder::Ascending);
        sort(&mut store, &mut columns, &request, None).unwrap();
        assert_eq!(contents(&store), owned(&[("a", 2), ("b", 0), ("b", 1)]));

        let request = SortRequest::new(0, SortOrder::Ascending).with_secondary(1, SortOrder::Descending);
        sort(&mut store, &mut columns, &request, None).unwrap();
        assert_eq!(contents(&store), owned(&[("a", 2), ("b", 1), ("b", 0)]));
    }

    #[test]
    fn test_invalid_requests_are_noops() {
        let (mut store, mut columns) = letter_number_grid(&[("b", 1), ("a", 2)]);
        columns.push(Column::new("Locked", ColumnKind::Text).with_sortable(false));
        columns.push(Column::new("Swatch", ColumnKind::Custom));
        let before = contents(&store);

        for request in [
            SortRequest::new(9, SortOrder::Ascending),
            SortRequest::new(2, SortOrder::Ascending),
            SortRequest::new(3, SortOrder::Ascending),
            SortRequest::new(0, SortOrder::None),
        ] {
            assert!(sort(&mut store, &mut columns, &request, None).is_none());
        }
        assert_eq!(contents(&store), before);
        assert_eq!(columns.sorted_column(), None);
    }

    #[test]
    fn test_unusable_secondary_is_skipped() {
        let (mut store, mut columns) = letter_number_grid(&[("b", 1), ("a", 2)]);
        let request = SortRequest::new(0, SortOrder::Ascending)
            .with_secondary(42, SortOrder::Ascending)
            .with_secondary(1, SortOrder::None);
        assert!(sort(&mut store, &mut columns, &request, None).is_some());
        assert_eq!(contents(&store), owned(&[("a", 2), ("b", 1)]));
    }

    #[test]
    fn test_previous_column_reset() {
        let (mut store, mut columns) = letter_number_grid(&[("b", 1), ("a", 2)]);
        let first = sort(&mut store, &mut columns, &SortRequest::new(0, SortOrder::Ascending), None)
            .unwrap();
        assert_eq!(first.previous_column, None);

        let second = sort(&mut store, &mut columns, &SortRequest::new(1, SortOrder::Descending), None)
            .unwrap();
        assert_eq!(second.previous_column, Some(0));
        assert_eq!(columns.get(0).unwrap().sort_order(), SortOrder::None);
        assert_eq!(columns.get(1).unwrap().sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_anchor_follows_row() {
        let (mut store, mut columns) = letter_number_grid(&[("c", 0), ("b", 1), ("a", 2)]);
        let anchor = store.id_at(0).unwrap();
        let report = sort(
            &mut store,
            &mut columns,
            &SortRequest::new(0, SortOrder::Ascending).with_anchor(anchor),
            None,
        )
        .unwrap();
        assert_eq!(report.anchor_index, Some(2));
        assert_eq!(store.id_at(2), Some(anchor));
        for (position, (_, row)) in store.iter().enumerate() {
            assert_eq!(row.index(), position);
        }
    }

    #[test]
    fn test_signals_emitted_in_order() {
        let (mut store, mut columns) = letter_number_grid(&[("b", 1), ("a", 2)]);
        let signals = SortSignals::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let begin_log = log.clone();
        signals.sort_beginning.connect(move |&(column, order)| {
            begin_log.lock().unwrap().push(("begin", column, order));
        });
        let end_log = log.clone();
        signals.sort_ended.connect(move |&(column, order)| {
            end_log.lock().unwrap().push(("end", column, order));
        });

        sort(
            &mut store,
            &mut columns,
            &SortRequest::new(1, SortOrder::Ascending),
            Some(&signals),
        )
        .unwrap();

        // No-op sorts emit nothing.
        sort(
            &mut store,
            &mut columns,
            &SortRequest::new(5, SortOrder::Ascending),
            Some(&signals),
        );

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                ("begin", 1, SortOrder::Ascending),
                ("end", 1, SortOrder::Ascending)
            ]
        );
    }

    #[test]
    fn test_panicking_comparer_leaves_indicator_set() {
        let (mut store, mut columns) = letter_number_grid(&[("b", 1), ("a", 2)]);
        columns.push(
            Column::new("Broken", ColumnKind::Custom)
                .with_comparer(crate::comparer::from_fn(|_, _| panic!("comparer failed"))),
        );
        for id in store.ids().to_vec() {
            store.set_cell(id, 2, Cell::from("x"));
        }
        let signals = SortSignals::new();
        let ended = Arc::new(Mutex::new(false));
        let flag = ended.clone();
        signals.sort_ended.connect(move |_| *flag.lock().unwrap() = true);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            sort(
                &mut store,
                &mut columns,
                &SortRequest::new(2, SortOrder::Descending),
                Some(&signals),
            )
        }));

        assert!(result.is_err());
        assert_eq!(columns.sorted_column(), Some((2, SortOrder::Descending)));
        assert!(!*ended.lock().unwrap());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_sub_rows_travel_with_parent() {
        let (mut store, mut columns) = letter_number_grid(&[("b", 1), ("a", 2)]);
        let parent = store.id_at(0).unwrap();
        let child_z = store.push_sub_row(parent, vec![Cell::from("z")]).unwrap();
        let child_y = store.push_sub_row(parent, vec![Cell::from("y")]).unwrap();

        sort(&mut store, &mut columns, &SortRequest::new(0, SortOrder::Ascending), None).unwrap();
        assert_eq!(store.index_of(parent), Some(1));
        assert_eq!(store.sub_rows(parent), &[child_z, child_y]);
        assert_eq!(store.index_of(child_y), Some(1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_sort_type_parsing() {
        assert_eq!("auto".parse::<SortType>().unwrap(), SortType::Auto);
        assert_eq!("HeapSort".parse::<SortType>().unwrap(), SortType::HeapSort);
        assert_eq!("merge_sort".parse::<SortType>().unwrap(), SortType::MergeSort);
        assert_eq!(" shell ".parse::<SortType>().unwrap(), SortType::ShellSort);
        assert_eq!("insertion-sort".parse::<SortType>().unwrap(), SortType::InsertionSort);
        assert!(matches!(
            "quick".parse::<SortType>(),
            Err(SortError::UnknownSortType { .. })
        ));
        assert_eq!(SortType::try_from(3u32).unwrap(), SortType::MergeSort);
        assert!(SortType::try_from(5u32).is_err());
        for sort_type in [SortType::Auto, SortType::HeapSort, SortType::ShellSort] {
            assert_eq!(sort_type.to_string().parse::<SortType>().unwrap(), sort_type);
        }
    }

    #[test]
    fn test_resolve_upgrades_unstable_override() {
        assert_eq!(SortType::ShellSort.resolve(5000, true, 1000), SortAlgorithm::InsertionSort);
        assert_eq!(SortType::HeapSort.resolve(5, true, 1000), SortAlgorithm::MergeSort);
        assert_eq!(SortType::ShellSort.resolve(5000, false, 1000), SortAlgorithm::ShellSort);
        assert_eq!(SortType::MergeSort.resolve(5, false, 1000), SortAlgorithm::MergeSort);
        assert_eq!(SortType::Auto.resolve(999, false, 1000), SortAlgorithm::ShellSort);
        assert_eq!(SortType::Auto.resolve(1000, false, 1000), SortAlgorithm::HeapSort);
    }
}
