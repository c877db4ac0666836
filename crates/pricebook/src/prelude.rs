//! Convenience re-exports for common usage
//!
//! ```rust
//! use pricebook::prelude::*;
//! ```

pub use crate::book::{BatchMode, IngestSummary, ListingEntry, ProductBook};
pub use crate::error::{PipelineError, PipelineResult};
pub use crate::store::{MemoryStore, ProductStore};
pub use pricebook_core::{CalcOptions, ComputedProduct, ProductInput, Registry, Sheet};
pub use pricebook_report::{Column, RenderMode, Report, ReportOptions};
