//! Loosely-typed spreadsheet rows.
//!
//! A [`RawRow`] is the shape produced by a generic sheet-to-records
//! conversion: arbitrary header keys mapping to cells that may hold a
//! number, text, a boolean, or nothing at all.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell value.
///
/// Deserializes untagged from JSON, so `{"Salary": 50000}`,
/// `{"Salary": "50,000"}` and `{"Salary": null}` are all accepted.
///
/// # Example
///
/// ```
/// use prominent_payroll::models::CellValue;
///
/// let cell: CellValue = serde_json::from_str("\"50000\"").unwrap();
/// assert_eq!(cell, CellValue::Text("50000".to_string()));
/// assert!(cell.is_truthy());
/// assert!(!CellValue::Number(0.0).is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A numeric cell.
    Number(f64),
    /// A text cell.
    Text(String),
    /// A boolean cell.
    Bool(bool),
    /// An explicitly empty cell.
    Empty,
}

impl CellValue {
    /// Returns true if the cell counts as filled in.
    ///
    /// Empty text, zero, `NaN`, `false` and empty cells do not count; a
    /// lookup that meets one of them moves on to the next candidate key.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Bool(b) => *b,
            CellValue::Empty => false,
        }
    }

    /// Renders the cell as text the way a spreadsheet displays it.
    ///
    /// Integral numbers print without a decimal point.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Number(n) => number_to_text(*n),
            CellValue::Text(s) => s.clone(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        format!("{n}")
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// One spreadsheet row keyed by its column headers.
///
/// # Example
///
/// ```
/// use prominent_payroll::models::{CellValue, RawRow};
///
/// let row = RawRow::new()
///     .with("ID", "EMP001")
///     .with("Name", "Juan Dela Cruz")
///     .with("Salary", 25000.0);
///
/// assert_eq!(row.get("Salary"), Some(&CellValue::Number(25000.0)));
/// assert_eq!(row.get("salary"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow {
    cells: BTreeMap<String, CellValue>,
}

impl RawRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the row with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, replacing any previous cell.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(key.into(), value.into());
    }

    /// Looks up a cell by its exact header.
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }

    /// Returns the number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}
