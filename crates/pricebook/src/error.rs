//! Pipeline-level errors

use crate::store::StoreError;
use pricebook_parser::ParseError;
use thiserror::Error;

/// Result type alias using [`PipelineError`]
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

/// Errors surfaced by the pipeline facade
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    /// A block failed normalization; `index` is its position in the batch
    /// so the caller can point the user at the offending segment.
    #[error("Block {index}: {source}")]
    Block {
        index: usize,
        #[source]
        source: ParseError,
    },

    /// Registry addressing failed (unknown sheet, ordinal out of range)
    #[error(transparent)]
    Registry(#[from] pricebook_core::Error),

    /// The persistence collaborator failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
