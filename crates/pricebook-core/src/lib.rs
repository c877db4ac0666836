//! # pricebook-core
//!
//! Core data structures and pricing logic for the pricebook pipeline.
//!
//! This crate provides the fundamental types used throughout pricebook:
//! - [`ProductInput`] and [`ComputedProduct`] - the normalized record and its derived fields
//! - [`Sheet`] and [`classify`] - the fixed category buckets products report into
//! - [`round2`] and [`round_weight`] - the two non-standard rounding rules
//! - [`Registry`] and [`DerivedIndex`] - the ordered product collection and its
//!   per-sheet ordinal addressing
//!
//! ## Example
//!
//! ```rust
//! use pricebook_core::{CalcOptions, ProductInput, Registry};
//!
//! let mut product = ProductInput::new(22.5, 9000.0);
//! product.category = Some("Oil".into());
//! product.packs = Some(12);
//! product.size = Some(1000.0);
//!
//! let mut registry = Registry::new();
//! registry.insert(product);
//!
//! let sheets = registry.rebuild(&CalcOptions::default());
//! assert_eq!(sheets.len(), 1);
//! ```

pub mod calc;
pub mod classify;
pub mod error;
pub mod index;
pub mod product;
pub mod registry;
pub mod rounding;

// Re-exports for convenience
pub use calc::{compute, CalcOptions};
pub use classify::{classify, Sheet};
pub use error::{Error, Result};
pub use index::{DerivedIndex, IndexEntry};
pub use product::{ComputedProduct, ProductInput};
pub use registry::{Registry, SheetRows};
pub use rounding::{round2, round_weight};
