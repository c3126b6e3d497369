//! Error model shared by the workspace.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure of a single user action.
///
/// Every variant is terminal for the action in progress only: the product list is
/// left untouched and the session carries on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An uploaded product file could not be parsed. Nothing was imported.
    #[error("import failed: {0}")]
    Import(String),

    /// Export was requested while the product list is empty.
    #[error("no products to export")]
    EmptyExport,

    /// The export table could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// File-system failure at an outer boundary.
    #[error("io error: {0}")]
    Io(String),
}

impl CatalogError {
    pub fn import(msg: impl Into<String>) -> Self {
        Self::Import(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
