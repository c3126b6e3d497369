//! Flat product rows.
//!
//! A [`ProductRecord`] is one row of the export sheet. Parent rows and variation
//! rows carry different column sets, so a record is an insertion-ordered map from
//! column name to cell rather than a fixed struct.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::columns;

/// A row read verbatim from an uploaded file: header name to cell text.
pub type RawRow = IndexMap<String, String>;

/// Kind of row, as written to the `Product Type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Simple,
    Variable,
    Variation,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Simple => "Simple",
            ProductType::Variable => "Variable",
            ProductType::Variation => "Variation",
        }
    }

    /// Parse the exact label used in the `Product Type` column.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Simple" => Some(ProductType::Simple),
            "Variable" => Some(ProductType::Variable),
            "Variation" => Some(ProductType::Variation),
            _ => None,
        }
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell: free text or a numeric flag (`0` / `1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Flag(u8),
    Text(String),
}

impl CellValue {
    pub fn empty() -> Self {
        CellValue::Text(String::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.is_empty())
    }

    /// Rendering used by the export writer.
    pub fn render(&self) -> String {
        match self {
            CellValue::Flag(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl core::fmt::Display for CellValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CellValue::Flag(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
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

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

impl From<u8> for CellValue {
    fn from(value: u8) -> Self {
        CellValue::Flag(value)
    }
}

impl From<ProductType> for CellValue {
    fn from(value: ProductType) -> Self {
        CellValue::Text(value.as_str().to_string())
    }
}

/// One output row: column name to cell, in insertion order.
///
/// Columns a record does not carry render as empty cells; records in the same list
/// are not required to share a column set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRecord {
    cells: IndexMap<String, CellValue>,
}

impl ProductRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from an uploaded row, keeping every column as text.
    pub fn from_raw(row: RawRow) -> Self {
        Self {
            cells: row
                .into_iter()
                .map(|(column, value)| (column, CellValue::Text(value)))
                .collect(),
        }
    }

    /// Set a cell. Re-setting an existing column keeps its position.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.set(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Rendered cell text; absent columns read as empty.
    pub fn text(&self, column: &str) -> String {
        self.get(column).map(CellValue::render).unwrap_or_default()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row kind, when the `Product Type` cell holds a known label.
    pub fn product_type(&self) -> Option<ProductType> {
        match self.get(columns::PRODUCT_TYPE)? {
            CellValue::Text(label) => ProductType::parse(label),
            CellValue::Flag(_) => None,
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ProductRecord
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
