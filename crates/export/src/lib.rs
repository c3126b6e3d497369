//! Export side of the product sheet.
//!
//! [`project`] lays the product list out on the storefront import schema and
//! [`sheet`] reads and writes the delimited files exchanged with the user.

pub mod projector;
pub mod sheet;

pub use projector::{OutputTable, project};
pub use sheet::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE, ExportFile, export, read_rows, write_table};
