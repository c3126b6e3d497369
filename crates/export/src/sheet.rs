//! Delimited file codec.
//!
//! Exports are comma-separated UTF-8 with `\n` line endings and a header row.
//! Cells are quoted only when needed, which keeps embedded commas, quotes and
//! newlines in descriptions intact.

use csv::{QuoteStyle, ReaderBuilder, Terminator, Trim, WriterBuilder};
use indexmap::IndexSet;

use woocsv_core::{CatalogError, CatalogResult, ProductRecord, RawRow};

use crate::projector::{OutputTable, project};

/// Download name of the export.
pub const EXPORT_FILE_NAME: &str = "woocommerce_products.csv";

/// MIME type of the export.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// A finished export, ready to hand to the download action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
    pub rows: usize,
}

/// Project and serialize the product list.
///
/// Fails with [`CatalogError::EmptyExport`] when there is nothing to export; no
/// file is produced in that case.
pub fn export(records: &[ProductRecord], parent_sku: &str) -> CatalogResult<ExportFile> {
    if records.is_empty() {
        return Err(CatalogError::EmptyExport);
    }

    let table = project(records, parent_sku);
    let bytes = write_table(&table)?;

    Ok(ExportFile {
        file_name: EXPORT_FILE_NAME,
        mime_type: EXPORT_MIME_TYPE,
        bytes,
        rows: table.len(),
    })
}

/// Serialize a projected table, header first.
pub fn write_table(table: &OutputTable) -> CatalogResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(table.columns())
        .map_err(|e| CatalogError::serialization(format!("failed to write header: {e}")))?;

    for (index, row) in table.rows().iter().enumerate() {
        writer.write_record(row).map_err(|e| {
            CatalogError::serialization(format!("failed to write row {}: {e}", index + 1))
        })?;
    }

    writer
        .into_inner()
        .map_err(|e| CatalogError::serialization(format!("failed to flush export: {e}")))
}

/// Parse an uploaded product file into rows keyed by header.
///
/// Any header set is accepted. The whole file is parsed before anything is
/// returned, so a malformed row rejects the upload as a whole.
pub fn read_rows(bytes: &[u8]) -> CatalogResult<Vec<RawRow>> {
    let content = std::str::from_utf8(bytes)
        .map_err(|e| CatalogError::import(format!("file is not valid UTF-8: {e}")))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(false)
        .trim(Trim::None)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| CatalogError::import(format!("failed to read header row: {e}")))?
        .clone();

    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(CatalogError::import("file has no header row"));
    }
    let headers = unique_headers(headers.iter());

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| CatalogError::import(format!("failed to parse row {}: {e}", index + 1)))?;

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Give repeated header names a `.1`, `.2`, ... suffix so no column is lost.
fn unique_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = IndexSet::new();
    for header in headers {
        let mut name = header.to_string();
        let mut n = 1;
        while seen.contains(&name) {
            name = format!("{header}.{n}");
            n += 1;
        }
        seen.insert(name);
    }
    seen.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use woocsv_core::columns;
    use woocsv_core::ProductType;

    fn mug() -> ProductRecord {
        ProductRecord::new()
            .with(columns::PRODUCT_TITLE, "Red Mug")
            .with(columns::DESCRIPTION, "Line one\nLine two, with comma")
            .with(columns::PRODUCT_TYPE, ProductType::Simple)
            .with(columns::SKU, "MUG-1")
    }

    #[test]
    fn export_rejects_an_empty_list() {
        assert_eq!(export(&[], "X"), Err(CatalogError::EmptyExport));
    }

    #[test]
    fn export_uses_unix_line_endings_and_header_first() {
        let file = export(&[mug()], "").unwrap();
        let text = String::from_utf8(file.bytes).unwrap();

        assert!(!text.contains("\r\n"));
        assert!(text.starts_with("SKU,Product Type,Product Title,Pubblicato,"));
        assert!(text.ends_with('\n'));
        assert_eq!(file.file_name, "woocommerce_products.csv");
        assert_eq!(file.mime_type, "text/csv");
        assert_eq!(file.rows, 1);
    }

    #[test]
    fn embedded_newlines_and_commas_are_quoted() {
        let file = export(&[mug()], "").unwrap();
        let text = String::from_utf8(file.bytes).unwrap();
        assert!(text.contains("\"Line one\nLine two, with comma\""));
    }

    #[test]
    fn exported_file_reads_back() {
        let file = export(&[mug()], "").unwrap();
        let rows = read_rows(&file.bytes).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["SKU"], "MUG-1");
        assert_eq!(rows[0]["Description"], "Line one\nLine two, with comma");
        assert_eq!(rows[0]["In Stock"], "1");
    }

    #[test]
    fn read_keeps_unknown_columns_and_empty_cells() {
        let rows = read_rows(b"SKU,Warehouse,Price\nA-1,B2,\n").unwrap();
        assert_eq!(rows.len(), 1);
        let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["SKU", "Warehouse", "Price"]);
        assert_eq!(rows[0]["Price"], "");
    }

    #[test]
    fn repeated_headers_keep_every_column() {
        let rows = read_rows(b"SKU,Price,SKU,SKU.1,SKU\nA,1,B,C,D\n").unwrap();
        let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["SKU", "Price", "SKU.1", "SKU.1.1", "SKU.2"]);
        assert_eq!(rows[0]["SKU"], "A");
        assert_eq!(rows[0]["SKU.1"], "B");
        assert_eq!(rows[0]["SKU.1.1"], "C");
        assert_eq!(rows[0]["SKU.2"], "D");
    }

    #[test]
    fn ragged_rows_reject_the_whole_file() {
        let err = read_rows(b"SKU,Price\nA-1,1\nB-2,2,extra\n").unwrap_err();
        assert!(matches!(err, CatalogError::Import(_)));
    }

    #[test]
    fn non_utf8_and_empty_files_are_rejected() {
        assert!(matches!(read_rows(&[0xff, 0xfe, 0x00]), Err(CatalogError::Import(_))));
        assert!(matches!(read_rows(b""), Err(CatalogError::Import(_))));
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let rows = read_rows("\u{feff}SKU\nA-1\n".as_bytes()).unwrap();
        assert_eq!(rows[0]["SKU"], "A-1");
    }
}
