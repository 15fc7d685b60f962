//! Row comparers.
//!
//! A [`RowComparer`] orders two rows by one column. Comparers are built per
//! sort call by a [`ComparerFactory`] bound to a column index and a
//! direction. Columns either carry their own factory or fall back to the
//! default for their [`ColumnKind`].
//!
//! # Null ordering
//!
//! Every built-in comparer applies the same rule: a cell that is missing
//! (sparse row), empty, or lacks the value the comparer reads is *null*. Null
//! sorts before any non-null value in ascending order and, because descending
//! inverts the whole comparison, after every non-null value in descending
//! order. Two nulls are equal.
//!
//! # Custom comparers
//!
//! ```
//! use std::cmp::Ordering;
//! use horizon_grid::comparer::{self, RowComparer};
//! use horizon_grid::{Cell, RowStore, SortOrder};
//!
//! // Order by text length.
//! let factory = comparer::from_fn(|a: &Cell, b: &Cell| {
//!     let len = |cell: &Cell| cell.text().map_or(0, str::len);
//!     len(a).cmp(&len(b))
//! });
//!
//! let store = RowStore::from_rows([vec![Cell::from("ccc")], vec![Cell::from("a")]]);
//! let cmp = factory(0, SortOrder::Ascending);
//! let (first, second) = (store.row_at(0).unwrap(), store.row_at(1).unwrap());
//! assert_eq!(cmp.compare(first, second), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::cell::{Cell, CellData};
use crate::column::{ColumnKind, SortOrder};
use crate::row::Row;

/// Orders two rows by a single column.
///
/// Implementations must be pure: the same pair always yields the same result
/// for the duration of a sort, and rows are never modified.
pub trait RowComparer: Send + Sync {
    /// Compares `a` and `b` with the comparer's direction applied.
    fn compare(&self, a: &Row, b: &Row) -> Ordering;
}

/// Builds a comparer bound to `(column index, direction)`.
pub type ComparerFactory = Arc<dyn Fn(usize, SortOrder) -> Box<dyn RowComparer> + Send + Sync>;

/// Ascending comparison of two non-null cells.
///
/// [`ColumnComparer`] wraps a value comparer with cell lookup, the null rule
/// and the sort direction.
pub trait ValueComparer: Send + Sync {
    /// Compares two cells that are both non-null for this comparer.
    fn compare_cells(&self, a: &Cell, b: &Cell) -> Ordering;

    /// Returns `true` if the cell carries no value this comparer can order.
    fn is_null(&self, cell: &Cell) -> bool {
        cell.is_empty()
    }
}

/// A [`RowComparer`] for one column built from a [`ValueComparer`].
#[derive(Debug, Clone)]
pub struct ColumnComparer<V> {
    column: usize,
    direction: SortOrder,
    values: V,
}

impl<V: ValueComparer> ColumnComparer<V> {
    /// Creates a comparer for `column` in `direction`.
    pub fn new(column: usize, direction: SortOrder, values: V) -> Self {
        Self {
            column,
            direction,
            values,
        }
    }

    /// The column this comparer reads.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The direction applied to every comparison.
    pub fn direction(&self) -> SortOrder {
        self.direction
    }

    fn resolve<'a>(&self, row: &'a Row) -> Option<&'a Cell> {
        row.cell(self.column).filter(|cell| !self.values.is_null(cell))
    }
}

impl<V: ValueComparer> RowComparer for ColumnComparer<V> {
    fn compare(&self, a: &Row, b: &Row) -> Ordering {
        let ordering = match (self.resolve(a), self.resolve(b)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => self.values.compare_cells(x, y),
        };
        self.direction.apply(ordering)
    }
}

/// Wraps a value comparer into a [`ComparerFactory`].
pub fn factory<V>(values: V) -> ComparerFactory
where
    V: ValueComparer + Clone + 'static,
{
    Arc::new(move |column, direction| {
        Box::new(ColumnComparer::new(column, direction, values.clone())) as Box<dyn RowComparer>
    })
}

/// Builds a [`ComparerFactory`] from a closure comparing two non-null cells.
pub fn from_fn<F>(compare: F) -> ComparerFactory
where
    F: Fn(&Cell, &Cell) -> Ordering + Clone + Send + Sync + 'static,
{
    factory(FnComparer(compare))
}

#[derive(Clone)]
struct FnComparer<F>(F);

impl<F> ValueComparer for FnComparer<F>
where
    F: Fn(&Cell, &Cell) -> Ordering + Send + Sync,
{
    fn compare_cells(&self, a: &Cell, b: &Cell) -> Ordering {
        (self.0)(a, b)
    }
}

impl ColumnKind {
    /// The comparer used when a column of this kind has no override.
    ///
    /// Returns `None` for [`ColumnKind::Custom`].
    pub fn default_comparer(&self) -> Option<ComparerFactory> {
        match self {
            ColumnKind::Text => Some(factory(TextComparer::default())),
            ColumnKind::Data => Some(factory(DataComparer)),
            ColumnKind::Number | ColumnKind::Progress => Some(factory(NumberComparer)),
            ColumnKind::DateTime => Some(factory(DateTimeComparer)),
            ColumnKind::CheckBox => Some(factory(CheckBoxComparer)),
            ColumnKind::Color => Some(factory(ColorComparer)),
            ColumnKind::Image => Some(factory(ImageComparer)),
            ColumnKind::Custom => None,
        }
    }
}

/// Orders cells by display text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextComparer {
    case_insensitive: bool,
}

impl TextComparer {
    /// Ordinal (byte-wise) text comparison.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text comparison ignoring case.
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
        }
    }
}

impl ValueComparer for TextComparer {
    fn compare_cells(&self, a: &Cell, b: &Cell) -> Ordering {
        let (a, b) = (a.text().unwrap_or_default(), b.text().unwrap_or_default());
        if self.case_insensitive {
            a.chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
        } else {
            a.cmp(b)
        }
    }

    fn is_null(&self, cell: &Cell) -> bool {
        cell.text().is_none_or(str::is_empty)
    }
}

/// Orders cells by typed data, falling back to text.
///
/// A cell with data sorts before a cell with only text. Data of different
/// kinds orders by a fixed kind rank; integers and floats compare by value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataComparer;

impl ValueComparer for DataComparer {
    fn compare_cells(&self, a: &Cell, b: &Cell) -> Ordering {
        match (a.data(), b.data()) {
            (Some(x), Some(y)) => compare_data(x, y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.text().cmp(&b.text()),
        }
    }
}

/// Orders numeric cells. Text that parses as a number is accepted when the
/// cell has no numeric data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberComparer;

impl NumberComparer {
    fn number(cell: &Cell) -> Option<Number> {
        cell.data().and_then(Number::from_data).or_else(|| {
            let text = cell.text()?.trim();
            text.parse::<i64>()
                .map(Number::Int)
                .or_else(|_| text.parse::<f64>().map(Number::Float))
                .ok()
        })
    }
}

impl ValueComparer for NumberComparer {
    fn compare_cells(&self, a: &Cell, b: &Cell) -> Ordering {
        match (Self::number(a), Self::number(b)) {
            (Some(x), Some(y)) => x.compare(y),
            // Only reached without the null filter.
            (x, y) => x.is_some().cmp(&y.is_some()),
        }
    }

    fn is_null(&self, cell: &Cell) -> bool {
        Self::number(cell).is_none()
    }
}

/// A numeric cell value. Comparisons are exact across integers and floats.
#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn from_data(data: &CellData) -> Option<Number> {
        match data {
            CellData::Int(n) => Some(Number::Int(*n)),
            CellData::Float(n) => Some(Number::Float(*n)),
            _ => None,
        }
    }

    fn compare(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (Number::Float(a), Number::Float(b)) => compare_floats(a, b),
            (Number::Int(a), Number::Float(b)) => compare_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => compare_int_float(b, a).reverse(),
        }
    }
}

/// Numeric order with `-0.0 == 0.0`. NaN sorts below every number when its
/// sign bit is set and above every number otherwise.
fn compare_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Compares an integer with a float without rounding the integer.
fn compare_int_float(int: i64, float: f64) -> Ordering {
    // 2^63, exactly representable.
    const I64_END: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if float >= I64_END {
        return Ordering::Less;
    }
    if float < -I64_END {
        return Ordering::Greater;
    }

    let floor = float.floor();
    match int.cmp(&(floor as i64)) {
        Ordering::Equal if float > floor => Ordering::Less,
        ordering => ordering,
    }
}

/// Orders date-time cells. ISO 8601 text (`2024-03-01T12:00:00`) is accepted
/// when the cell has no date-time data.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeComparer;

impl DateTimeComparer {
    fn date_time(cell: &Cell) -> Option<NaiveDateTime> {
        cell.data()
            .and_then(CellData::as_date_time)
            .or_else(|| cell.text()?.trim().parse().ok())
    }
}

impl ValueComparer for DateTimeComparer {
    fn compare_cells(&self, a: &Cell, b: &Cell) -> Ordering {
        Self::date_time(a).cmp(&Self::date_time(b))
    }

    fn is_null(&self, cell: &Cell) -> bool {
        Self::date_time(cell).is_none()
    }
}

/// Orders check box cells: unchecked, partially checked, checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckBoxComparer;

impl ValueComparer for CheckBoxComparer {
    fn compare_cells(&self, a: &Cell, b: &Cell) -> Ordering {
        let state = |cell: &Cell| cell.data().and_then(CellData::as_check_state);
        state(a).cmp(&state(b))
    }

    fn is_null(&self, cell: &Cell) -> bool {
        cell.data().and_then(CellData::as_check_state).is_none()
    }
}

/// Orders color cells by packed ARGB value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorComparer;

impl ValueComparer for ColorComparer {
    fn compare_cells(&self, a: &Cell, b: &Cell) -> Ordering {
        let argb = |cell: &Cell| cell.data().and_then(CellData::as_color);
        argb(a).cmp(&argb(b))
    }

    fn is_null(&self, cell: &Cell) -> bool {
        cell.data().and_then(CellData::as_color).is_none()
    }
}

/// Orders image cells: cells without an image first, then by caption text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageComparer;

impl ValueComparer for ImageComparer {
    fn compare_cells(&self, a: &Cell, b: &Cell) -> Ordering {
        let has_image = |cell: &Cell| cell.data().and_then(CellData::as_image).is_some();
        has_image(a)
            .cmp(&has_image(b))
            .then_with(|| a.text().cmp(&b.text()))
    }
}

/// Compares two data values: same kind by value, different kinds by rank.
pub fn compare_data(a: &CellData, b: &CellData) -> Ordering {
    match (a, b) {
        (CellData::String(x), CellData::String(y)) => x.cmp(y),
        (CellData::Int(x), CellData::Int(y)) => x.cmp(y),
        (CellData::Bool(x), CellData::Bool(y)) => x.cmp(y),
        (CellData::DateTime(x), CellData::DateTime(y)) => x.cmp(y),
        (CellData::CheckState(x), CellData::CheckState(y)) => x.cmp(y),
        (CellData::Color(x), CellData::Color(y)) => x.cmp(y),
        (CellData::Image(x), CellData::Image(y)) => x.cmp(y),
        _ => match (Number::from_data(a), Number::from_data(b)) {
            (Some(x), Some(y)) => x.compare(y),
            _ => a.rank().cmp(&b.rank()),
        },
    }
}

/// A primary comparer followed by tie-break comparers.
///
/// [`compare`](Self::compare) consults each comparer in order and returns the
/// first non-`Equal` result.
pub struct ComparerChain {
    comparers: Vec<Box<dyn RowComparer>>,
}

impl std::fmt::Debug for ComparerChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparerChain")
            .field("len", &self.comparers.len())
            .finish()
    }
}

impl ComparerChain {
    /// Creates a chain with the primary comparer.
    pub fn new(primary: Box<dyn RowComparer>) -> Self {
        Self {
            comparers: vec![primary],
        }
    }

    /// Appends a tie-break comparer.
    pub fn push(&mut self, comparer: Box<dyn RowComparer>) {
        self.comparers.push(comparer);
    }

    /// Number of comparers, primary included.
    pub fn len(&self) -> usize {
        self.comparers.len()
    }

    /// Always `false`: a chain has a primary comparer.
    pub fn is_empty(&self) -> bool {
        self.comparers.is_empty()
    }

    /// Compares two rows through the chain.
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        for comparer in &self.comparers {
            match comparer.compare(a, b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CheckState;
    use crate::column::{Column, ColumnModel};
    use crate::row::RowStore;
    use crate::sort::{self, SortRequest};

    fn two_rows(a: Cell, b: Cell) -> RowStore {
        RowStore::from_rows([vec![a], vec![b]])
    }

    fn compare_with(factory: &ComparerFactory, direction: SortOrder, store: &RowStore) -> Ordering {
        let cmp = factory(0, direction);
        cmp.compare(store.row_at(0).unwrap(), store.row_at(1).unwrap())
    }

    #[test]
    fn test_text_comparer() {
        let text = ColumnKind::Text.default_comparer().unwrap();
        let store = two_rows(Cell::from("apple"), Cell::from("Banana"));
        // Ordinal: uppercase sorts first.
        assert_eq!(compare_with(&text, SortOrder::Ascending, &store), Ordering::Greater);
        assert_eq!(compare_with(&text, SortOrder::Descending, &store), Ordering::Less);

        let folded = factory(TextComparer::case_insensitive());
        assert_eq!(compare_with(&folded, SortOrder::Ascending, &store), Ordering::Less);
    }

    #[test]
    fn test_nulls_first_ascending_last_descending() {
        let text = ColumnKind::Text.default_comparer().unwrap();
        let store = two_rows(Cell::new(), Cell::from("a"));
        assert_eq!(compare_with(&text, SortOrder::Ascending, &store), Ordering::Less);
        assert_eq!(compare_with(&text, SortOrder::Descending, &store), Ordering::Greater);

        let both_null = two_rows(Cell::new(), Cell::text_only(""));
        assert_eq!(compare_with(&text, SortOrder::Ascending, &both_null), Ordering::Equal);
    }

    #[test]
    fn test_missing_cell_is_null() {
        let number = ColumnKind::Number.default_comparer().unwrap();
        let store = RowStore::from_rows([vec![Cell::from(1)], vec![]]);
        let cmp = number(0, SortOrder::Ascending);
        assert_eq!(
            cmp.compare(store.row_at(1).unwrap(), store.row_at(0).unwrap()),
            Ordering::Less
        );
        let out_of_range = number(7, SortOrder::Ascending);
        assert_eq!(
            out_of_range.compare(store.row_at(0).unwrap(), store.row_at(1).unwrap()),
            Ordering::Equal
        );
    }

    #[test]
    fn test_number_comparer_mixed() {
        let number = ColumnKind::Number.default_comparer().unwrap();
        assert_eq!(
            compare_with(&number, SortOrder::Ascending, &two_rows(Cell::from(2), Cell::from(10))),
            Ordering::Less
        );
        assert_eq!(
            compare_with(&number, SortOrder::Ascending, &two_rows(Cell::from(2.5), Cell::from(2))),
            Ordering::Greater
        );
        // Text is parsed when no numeric data is present.
        assert_eq!(
            compare_with(&number, SortOrder::Ascending, &two_rows(Cell::from("10"), Cell::from("9"))),
            Ordering::Greater
        );
        // Unparsable text is null.
        assert_eq!(
            compare_with(&number, SortOrder::Ascending, &two_rows(Cell::from("n/a"), Cell::from(-5))),
            Ordering::Less
        );
    }

    #[test]
    fn test_data_comparer_prefers_data() {
        let data = ColumnKind::Data.default_comparer().unwrap();
        // Data wins over text: 2 < 10 numerically even though "10" < "2" as text.
        let store = two_rows(
            Cell::new().with_data(2).with_text("2"),
            Cell::new().with_data(10).with_text("10"),
        );
        assert_eq!(compare_with(&data, SortOrder::Ascending, &store), Ordering::Less);

        let text_only = two_rows(Cell::from("b"), Cell::from("a"));
        assert_eq!(compare_with(&data, SortOrder::Ascending, &text_only), Ordering::Greater);

        let mixed = two_rows(Cell::from("a"), Cell::from(1));
        assert_eq!(compare_with(&data, SortOrder::Ascending, &mixed), Ordering::Greater);
    }

    #[test]
    fn test_date_time_comparer() {
        let dates = ColumnKind::DateTime.default_comparer().unwrap();
        let earlier: NaiveDateTime = "2024-01-01T00:00:00".parse().unwrap();
        let store = two_rows(Cell::from(CellData::from(earlier)), Cell::from("2024-06-30T08:15:00"));
        assert_eq!(compare_with(&dates, SortOrder::Ascending, &store), Ordering::Less);
    }

    #[test]
    fn test_check_box_color_image() {
        let check = ColumnKind::CheckBox.default_comparer().unwrap();
        let store = two_rows(
            Cell::from(CellData::from(CheckState::Checked)),
            Cell::from(false),
        );
        assert_eq!(compare_with(&check, SortOrder::Ascending, &store), Ordering::Greater);

        let color = ColumnKind::Color.default_comparer().unwrap();
        let store = two_rows(
            Cell::from(CellData::Color(0xFF00_0000)),
            Cell::from(CellData::Color(0xFFFF_FFFF)),
        );
        assert_eq!(compare_with(&color, SortOrder::Ascending, &store), Ordering::Less);

        let image = ColumnKind::Image.default_comparer().unwrap();
        let store = two_rows(
            Cell::from("caption"),
            Cell::new().with_data(CellData::Image("icon".into())),
        );
        assert_eq!(compare_with(&image, SortOrder::Ascending, &store), Ordering::Less);
    }

    #[test]
    fn test_compare_data_ranks() {
        assert_eq!(
            compare_data(&CellData::Int(3), &CellData::Float(2.5)),
            Ordering::Greater
        );
        assert_eq!(
            compare_data(&CellData::Bool(true), &CellData::String("a".into())),
            Ordering::Less
        );
        assert_eq!(
            compare_data(&CellData::Float(f64::NAN), &CellData::Float(f64::NAN)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_large_ints_against_floats() {
        const TWO_53: i64 = 1 << 53;
        let values = [
            CellData::Int(TWO_53 + 1),
            CellData::Float(TWO_53 as f64),
            CellData::Int(TWO_53),
        ];
        assert_eq!(compare_data(&values[0], &values[1]), Ordering::Greater);
        assert_eq!(compare_data(&values[1], &values[2]), Ordering::Equal);
        assert_eq!(compare_data(&values[0], &values[2]), Ordering::Greater);

        let mut store = RowStore::from_rows(values.iter().cloned().map(|v| vec![Cell::from(v)]));
        let mut columns: ColumnModel = [Column::new("N", ColumnKind::Number)].into_iter().collect();
        sort::sort(
            &mut store,
            &mut columns,
            &SortRequest::new(0, SortOrder::Ascending),
            None,
        )
        .unwrap();
        let sorted: Vec<CellData> = store
            .iter()
            .filter_map(|(_, row)| row.cell(0).and_then(Cell::data).cloned())
            .collect();
        assert_eq!(
            sorted,
            vec![
                CellData::Float(TWO_53 as f64),
                CellData::Int(TWO_53),
                CellData::Int(TWO_53 + 1),
            ]
        );
    }

    #[test]
    fn test_mixed_number_edges() {
        assert_eq!(compare_int_float(-3, -2.5), Ordering::Less);
        assert_eq!(compare_int_float(2, 2.0), Ordering::Equal);
        assert_eq!(compare_int_float(2, 2.25), Ordering::Less);
        assert_eq!(compare_int_float(i64::MAX, 9.3e18), Ordering::Less);
        assert_eq!(compare_int_float(i64::MIN, -9.3e18), Ordering::Greater);
        assert_eq!(compare_int_float(i64::MAX, f64::INFINITY), Ordering::Less);
        assert_eq!(compare_int_float(i64::MIN, f64::NEG_INFINITY), Ordering::Greater);
        assert_eq!(compare_int_float(i64::MAX, f64::NAN), Ordering::Less);
        assert_eq!(compare_int_float(i64::MIN, -f64::NAN), Ordering::Greater);
        assert_eq!(compare_floats(-0.0, 0.0), Ordering::Equal);
        assert_eq!(compare_floats(f64::INFINITY, f64::NAN), Ordering::Less);
        assert_eq!(compare_int_float(0, -0.0), Ordering::Equal);
    }

    #[test]
    fn test_number_text_fallback_for_non_numeric_data() {
        let number = ColumnKind::Number.default_comparer().unwrap();
        let store = two_rows(
            Cell::new().with_data("label").with_text("12"),
            Cell::from(3),
        );
        assert_eq!(compare_with(&number, SortOrder::Ascending, &store), Ordering::Greater);
    }

    #[test]
    fn test_chain_tie_break() {
        let store = RowStore::from_rows([
            vec![Cell::from("x"), Cell::from(2)],
            vec![Cell::from("x"), Cell::from(1)],
        ]);
        let text = ColumnKind::Text.default_comparer().unwrap();
        let number = ColumnKind::Number.default_comparer().unwrap();

        let mut chain = ComparerChain::new(text(0, SortOrder::Ascending));
        let (a, b) = (store.row_at(0).unwrap(), store.row_at(1).unwrap());
        assert_eq!(chain.compare(a, b), Ordering::Equal);

        chain.push(number(1, SortOrder::Ascending));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.compare(a, b), Ordering::Greater);
    }

    #[test]
    fn test_custom_kind_has_no_default() {
        assert!(ColumnKind::Custom.default_comparer().is_none());
    }
}
