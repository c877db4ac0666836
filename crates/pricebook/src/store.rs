//! Persistence collaborator
//!
//! The core owns no schema or migration logic: a store only accepts
//! already-computed rows and hands them back. [`MemoryStore`] is the
//! in-process implementation used by tests and one-shot runs; a relational
//! backend implements the same trait out of tree.

use ahash::AHashMap;
use pricebook_core::ComputedProduct;
use thiserror::Error;

/// Errors from a persistence backend
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// External persistence interface for computed rows, keyed by sheet name.
pub trait ProductStore {
    /// Persist one computed row under a sheet
    fn insert(&mut self, sheet_name: &str, row: &ComputedProduct) -> Result<(), StoreError>;

    /// Fetch every stored row of a sheet
    fn fetch_all(&mut self, sheet_name: &str) -> Result<Vec<ComputedProduct>, StoreError>;
}

/// In-memory store, insertion-ordered per sheet.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: AHashMap<String, Vec<ComputedProduct>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total stored rows across sheets
    pub fn len(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProductStore for MemoryStore {
    fn insert(&mut self, sheet_name: &str, row: &ComputedProduct) -> Result<(), StoreError> {
        self.rows
            .entry(sheet_name.to_string())
            .or_default()
            .push(row.clone());
        Ok(())
    }

    fn fetch_all(&mut self, sheet_name: &str) -> Result<Vec<ComputedProduct>, StoreError> {
        Ok(self.rows.get(sheet_name).cloned().unwrap_or_default())
    }
}
