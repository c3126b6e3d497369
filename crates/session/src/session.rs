//! Per-user session and its action handler.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use woocsv_core::{CatalogError, CatalogResult};
use woocsv_export::{ExportFile, export, read_rows};
use woocsv_products::{ProductFormData, build, split_categories};

use crate::store::ProductListStore;

/// A user action, as delivered by the form collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    /// "Add Product" with the current form contents.
    AddProduct(Box<ProductFormData>),
    /// An uploaded product file.
    ImportFile { bytes: Vec<u8> },
    /// "Export to CSV"; `current_sku` is the SKU field as it reads right now.
    Export { current_sku: String },
    /// "Clear Product List" together with the state of its confirmation control.
    Clear { confirmed: bool },
}

/// User-facing message produced by an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Notification {
    Success(String),
    Warning(String),
    Error(String),
}

/// What the collaborator renders after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub notification: Option<Notification>,
    /// Running number of stored rows.
    pub record_count: usize,
    /// Present only after a successful export.
    pub download: Option<ExportFile>,
}

/// Session state: the product list plus the categories typed so far.
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: ProductListStore,
    known_categories: BTreeSet<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ProductListStore {
        &self.store
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Every category entered during this session, sorted.
    pub fn known_categories(&self) -> impl Iterator<Item = &str> {
        self.known_categories.iter().map(String::as_str)
    }

    /// Build rows for a submission and append them. Returns the number of rows added.
    pub fn add_product(&mut self, form: &ProductFormData) -> usize {
        self.known_categories
            .extend(split_categories(&form.category));

        let records = build(form);
        let added = records.len();
        self.store.append(records);

        tracing::info!(
            sku = %form.sku,
            rows = added,
            total = self.store.count(),
            "product added"
        );
        added
    }

    /// Import an uploaded file. Either every row is appended or none is.
    pub fn import_file(&mut self, bytes: &[u8]) -> CatalogResult<usize> {
        let rows = read_rows(bytes).inspect_err(|e| {
            tracing::warn!(error = %e, "product file rejected");
        })?;
        let imported = self.store.import_from(rows);

        tracing::info!(rows = imported, total = self.store.count(), "product file imported");
        Ok(imported)
    }

    /// Export the whole list. `current_sku` fills `Genitore` on variation rows.
    pub fn export(&self, current_sku: &str) -> CatalogResult<ExportFile> {
        match export(self.store.records(), current_sku) {
            Ok(file) => {
                tracing::info!(rows = file.rows, bytes = file.bytes.len(), "export generated");
                Ok(file)
            }
            Err(e) => {
                tracing::warn!(error = %e, "export not generated");
                Err(e)
            }
        }
    }

    /// Clear the list if `confirmed`; otherwise nothing happens. Returns whether
    /// the list was cleared.
    pub fn clear(&mut self, confirmed: bool) -> bool {
        let pending = self.store.request_clear();
        if !confirmed {
            tracing::debug!(rows = pending.pending(), "clear not confirmed");
            pending.abort();
            return false;
        }

        let removed = pending.confirm();
        tracing::info!(removed, "product list cleared");
        true
    }

    /// Run one action to completion and describe the result for display.
    pub fn handle(&mut self, action: SessionAction) -> ActionOutcome {
        let (notification, download) = match action {
            SessionAction::AddProduct(form) => {
                self.add_product(&form);
                (Some(success("Product added successfully!")), None)
            }
            SessionAction::ImportFile { bytes } => match self.import_file(&bytes) {
                Ok(_) => (
                    Some(success(
                        "CSV file loaded successfully and products have been added to the list!",
                    )),
                    None,
                ),
                Err(e) => (Some(failure(&e)), None),
            },
            SessionAction::Export { current_sku } => match self.export(&current_sku) {
                Ok(file) => (
                    Some(success("CSV file with all products has been generated!")),
                    Some(file),
                ),
                Err(e) => (Some(failure(&e)), None),
            },
            SessionAction::Clear { confirmed } => {
                if self.clear(confirmed) {
                    (Some(success("Product list has been cleared.")), None)
                } else {
                    (None, None)
                }
            }
        };

        ActionOutcome {
            notification,
            record_count: self.store.count(),
            download,
        }
    }
}

fn success(message: &str) -> Notification {
    Notification::Success(message.to_string())
}

fn failure(err: &CatalogError) -> Notification {
    match err {
        CatalogError::EmptyExport => Notification::Warning(
            "No products to export. Please add at least one product.".to_string(),
        ),
        other => Notification::Error(other.to_string()),
    }
}
