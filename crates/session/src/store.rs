//! Product list store.

use woocsv_core::{ProductRecord, RawRow};

/// Ordered, append-only list of every row built or imported in a session.
///
/// The only other mutation is a full clear, which has to go through
/// [`request_clear`](Self::request_clear) and be confirmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListStore {
    records: Vec<ProductRecord>,
}

impl ProductListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rows at the end, keeping their order.
    pub fn append<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = ProductRecord>,
    {
        self.records.extend(records);
    }

    /// Append uploaded rows verbatim, in file order. Returns the number imported.
    pub fn import_from<I>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = RawRow>,
    {
        let before = self.records.len();
        self.records.extend(rows.into_iter().map(ProductRecord::from_raw));
        self.records.len() - before
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// First stage of a clear. Nothing changes until the returned guard is
    /// confirmed; dropping or aborting it leaves the list as it was.
    pub fn request_clear(&mut self) -> PendingClear<'_> {
        PendingClear { store: self }
    }
}

/// A clear waiting for the user's confirmation.
#[must_use = "a clear only happens once it is confirmed"]
#[derive(Debug)]
pub struct PendingClear<'a> {
    store: &'a mut ProductListStore,
}

impl PendingClear<'_> {
    /// Number of rows that confirming would remove.
    pub fn pending(&self) -> usize {
        self.store.records.len()
    }

    /// Empty the store. Returns the number of rows removed.
    pub fn confirm(self) -> usize {
        let removed = self.store.records.len();
        self.store.records.clear();
        removed
    }

    /// Give up the clear; the store is untouched.
    pub fn abort(self) {}
}
