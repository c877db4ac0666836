//! Error types for pricebook-parser

use thiserror::Error;

/// Result type alias using [`ParseError`]
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while normalizing a product block
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A required field is absent or failed numeric coercion.
    ///
    /// Fatal for the single block it occurs in; malformed optional fields
    /// just become `None`.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
}
