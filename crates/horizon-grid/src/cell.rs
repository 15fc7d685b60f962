//! Cell values for grid rows.
//!
//! A [`Cell`] carries an optional typed value ([`CellData`]) and an optional
//! display string. Which of the two is authoritative for ordering is decided
//! by the column's comparer, not by the cell.

use chrono::NaiveDateTime;

/// Check state for check box cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CheckState {
    /// Cell is unchecked.
    #[default]
    Unchecked,
    /// Cell is partially checked (tri-state check boxes).
    PartiallyChecked,
    /// Cell is checked.
    Checked,
}

impl CheckState {
    /// Returns `true` if the cell is checked (fully or partially).
    pub fn is_checked(&self) -> bool {
        !matches!(self, CheckState::Unchecked)
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// Typed value stored in a cell.
///
/// # Example
///
/// ```
/// use horizon_grid::CellData;
///
/// let data = CellData::from(42);
/// assert_eq!(data.as_int(), Some(42));
/// assert_eq!(data.as_number(), Some(42.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CellData {
    /// String data.
    String(String),
    /// Integer data.
    Int(i64),
    /// Floating point data.
    Float(f64),
    /// Boolean data.
    Bool(bool),
    /// Calendar date and time.
    DateTime(NaiveDateTime),
    /// Check box state.
    CheckState(CheckState),
    /// Packed ARGB color (`0xAARRGGBB`).
    Color(u32),
    /// Image resource key.
    Image(String),
}

impl CellData {
    /// Attempts to get the data as a string slice.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            CellData::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the data as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellData::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the data as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellData::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns integer or float data widened to `f64`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellData::Int(n) => Some(*n as f64),
            CellData::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the data as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellData::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get the data as a date-time.
    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            CellData::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Returns the check state, treating booleans as checked/unchecked.
    pub fn as_check_state(&self) -> Option<CheckState> {
        match self {
            CellData::CheckState(s) => Some(*s),
            CellData::Bool(b) => Some(CheckState::from(*b)),
            _ => None,
        }
    }

    /// Attempts to get the data as a packed ARGB color.
    pub fn as_color(&self) -> Option<u32> {
        match self {
            CellData::Color(argb) => Some(*argb),
            _ => None,
        }
    }

    /// Attempts to get the data as an image key.
    pub fn as_image(&self) -> Option<&str> {
        match self {
            CellData::Image(key) => Some(key.as_str()),
            _ => None,
        }
    }

    /// Position of this variant in the fixed cross-variant ordering.
    ///
    /// Numbers share a rank so integers and floats compare by value.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            CellData::Bool(_) => 0,
            CellData::CheckState(_) => 1,
            CellData::Int(_) | CellData::Float(_) => 2,
            CellData::DateTime(_) => 3,
            CellData::Color(_) => 4,
            CellData::String(_) => 5,
            CellData::Image(_) => 6,
        }
    }
}

impl From<&str> for CellData {
    fn from(s: &str) -> Self {
        CellData::String(s.to_string())
    }
}

impl From<String> for CellData {
    fn from(s: String) -> Self {
        CellData::String(s)
    }
}

impl From<i64> for CellData {
    fn from(n: i64) -> Self {
        CellData::Int(n)
    }
}

impl From<i32> for CellData {
    fn from(n: i32) -> Self {
        CellData::Int(i64::from(n))
    }
}

impl From<f64> for CellData {
    fn from(n: f64) -> Self {
        CellData::Float(n)
    }
}

impl From<bool> for CellData {
    fn from(b: bool) -> Self {
        CellData::Bool(b)
    }
}

impl From<NaiveDateTime> for CellData {
    fn from(dt: NaiveDateTime) -> Self {
        CellData::DateTime(dt)
    }
}

impl From<CheckState> for CellData {
    fn from(state: CheckState) -> Self {
        CellData::CheckState(state)
    }
}

/// A single cell of a grid row.
///
/// # Example
///
/// ```
/// use horizon_grid::Cell;
///
/// let price = Cell::new().with_data(9.5).with_text("$9.50");
/// assert_eq!(price.text(), Some("$9.50"));
/// assert!(!price.is_empty());
/// assert!(Cell::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    data: Option<CellData>,
    text: Option<String>,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cell holding only display text.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            data: None,
            text: Some(text.into()),
        }
    }

    /// Creates a cell holding only typed data.
    pub fn data_only(data: impl Into<CellData>) -> Self {
        Self {
            data: Some(data.into()),
            text: None,
        }
    }

    /// Sets the typed value.
    pub fn with_data(mut self, data: impl Into<CellData>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Sets the display text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// The typed value, if any.
    pub fn data(&self) -> Option<&CellData> {
        self.data.as_ref()
    }

    /// The display text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replaces the typed value.
    pub fn set_data(&mut self, data: Option<CellData>) {
        self.data = data;
    }

    /// Replaces the display text.
    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    /// Returns `true` when the cell has neither data nor non-empty text.
    pub fn is_empty(&self) -> bool {
        self.data.is_none() && self.text.as_deref().is_none_or(str::is_empty)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::text_only(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::text_only(text)
    }
}

impl From<CellData> for Cell {
    fn from(data: CellData) -> Self {
        Cell::data_only(data)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::data_only(n)
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Cell::data_only(n)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::data_only(n)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::data_only(b)
    }
}
