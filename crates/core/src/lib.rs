//! `woocsv-core`: shared building blocks for the product sheet tooling.
//!
//! This crate contains the **row model** (`ProductRecord`), the column vocabulary
//! of the storefront import schema and the error type shared by every other crate.
//! It performs no IO.

pub mod columns;
pub mod error;
pub mod record;

pub use error::{CatalogError, CatalogResult};
pub use record::{CellValue, ProductRecord, ProductType, RawRow};
