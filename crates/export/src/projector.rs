//! Schema projector.
//!
//! Projection runs in three steps:
//!
//! 1. take the union of all record columns, in first-appearance order;
//! 2. add the derived flag columns, computed per row;
//! 3. select the fixed column order: the leading columns, every column whose name
//!    contains `"Attribute"`, then `Image Link`.
//!
//! Columns outside that selection (`Tax Status`, the localized attribute flags,
//! unknown imported columns) stay in the working table but are not emitted.

use indexmap::IndexSet;

use woocsv_core::columns;
use woocsv_core::{CellValue, ProductRecord, ProductType};

/// The product list laid out on the export schema. Recomputed on every export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl OutputTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` in column `name`.
    pub fn cell(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// All cells of column `name`, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }
}

/// Project the product list onto the export schema.
///
/// `parent_sku` is the SKU currently entered in the form; it is written to
/// `Genitore` on every variation row regardless of which product the row came from.
pub fn project(records: &[ProductRecord], parent_sku: &str) -> OutputTable {
    let mut union: IndexSet<String> = IndexSet::new();
    for record in records {
        for column in record.columns() {
            if !union.contains(column) {
                union.insert(column.to_string());
            }
        }
    }

    let derived: Vec<ProductRecord> = records
        .iter()
        .map(|record| with_derived_columns(record, parent_sku))
        .collect();
    for column in DERIVED_COLUMNS {
        union.insert(column.to_string());
    }

    let mut order: Vec<String> = columns::LEADING_ORDER
        .iter()
        .map(|c| c.to_string())
        .collect();
    order.extend(
        union
            .iter()
            .filter(|c| columns::is_attribute_column(c))
            .cloned(),
    );
    order.push(columns::IMAGE_LINK.to_string());

    let rows = derived
        .iter()
        .map(|record| order.iter().map(|column| record.text(column)).collect())
        .collect();

    tracing::debug!(
        rows = records.len(),
        working_columns = union.len(),
        output_columns = order.len(),
        "projected product list"
    );

    OutputTable {
        columns: order,
        rows,
    }
}

const DERIVED_COLUMNS: [&str; 12] = [
    columns::PUBLISHED,
    columns::VISIBILITY,
    columns::IN_STOCK,
    columns::BACKORDERS,
    columns::SOLD_INDIVIDUALLY,
    columns::ALLOW_REVIEWS,
    columns::ATTRIBUTE_1_VISIBLE,
    columns::ATTRIBUTE_1_GLOBAL,
    columns::PARENT,
    columns::FEATURED,
    columns::TAX_STATE,
    columns::TAX_CLASS,
];

fn with_derived_columns(record: &ProductRecord, parent_sku: &str) -> ProductRecord {
    let kind = record.product_type();
    let is_variation = kind == Some(ProductType::Variation);

    let mut row = record.clone();
    row.set(columns::PUBLISHED, 0u8);
    row.set(columns::VISIBILITY, 0u8);
    row.set(columns::IN_STOCK, 1u8);
    row.set(columns::BACKORDERS, 0u8);
    row.set(columns::SOLD_INDIVIDUALLY, 0u8);
    row.set(columns::ALLOW_REVIEWS, 0u8);
    row.set(
        columns::ATTRIBUTE_1_VISIBLE,
        flag_or_empty(kind == Some(ProductType::Variable)),
    );
    row.set(
        columns::ATTRIBUTE_1_GLOBAL,
        flag_or_empty(matches!(
            kind,
            Some(ProductType::Variable | ProductType::Variation)
        )),
    );
    row.set(columns::PARENT, if is_variation { parent_sku } else { "" });
    row.set(columns::FEATURED, 0u8);
    row.set(columns::TAX_STATE, columns::TAXABLE);
    row.set(
        columns::TAX_CLASS,
        if is_variation { columns::TAX_PARENT } else { "" },
    );
    row
}

fn flag_or_empty(set: bool) -> CellValue {
    if set { CellValue::Flag(0) } else { CellValue::empty() }
}
