//! Error types for pricebook-core

use crate::classify::Sheet;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pricebook-core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Sheet name does not match any known sheet
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Ordinal outside the current per-sheet range
    #[error("Id {ordinal} not found in sheet '{sheet}' (rows: {len})")]
    OrdinalNotFound {
        sheet: Sheet,
        ordinal: usize,
        len: usize,
    },

    /// Sheet-wide delete matched no products
    #[error("No products in sheet '{0}'")]
    SheetEmpty(Sheet),
}
