//! # pricebook
//!
//! A pipeline that turns free-text product descriptions into a grouped,
//! auditable pricing report: parse → normalize → classify → calculate →
//! index → emit.
//!
//! ## Example
//!
//! ```rust
//! use pricebook::prelude::*;
//!
//! let batch = "\
//! Date: 24.11.2025
//! Category: Oil
//! Size: 1000ml
//! Packs: 12
//! Buy-in: 22.50$
//! Mark - up: 0.50$
//! Price Unit: 9000
//! ";
//!
//! let mut book = ProductBook::new();
//! let summary = book.ingest(batch, BatchMode::Atomic).unwrap();
//! assert_eq!(summary.added, 1);
//!
//! let report = book.report(&ReportOptions::default());
//! assert_eq!(report.total_rows(), 1);
//! ```

pub mod book;
pub mod error;
pub mod prelude;
pub mod store;

pub use book::{BatchMode, BlockFailure, IngestSummary, ListingEntry, ProductBook};
pub use error::{PipelineError, PipelineResult};
pub use store::{MemoryStore, ProductStore, StoreError};

// Re-export the member crates' surface
pub use pricebook_core::{
    classify, compute, round2, round_weight, CalcOptions, ComputedProduct, DerivedIndex,
    ProductInput, Registry, Sheet,
};
pub use pricebook_parser::{parse_block, split_blocks, ParseError};
pub use pricebook_report::{
    assemble, CellContent, Column, ColumnFormat, RenderMode, Report, ReportOptions, Row, Section,
    SheetReport,
};
