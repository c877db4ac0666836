//! The pipeline facade
//!
//! [`ProductBook`] owns the registry and the calculation options and
//! exposes the caller-level operations: batch ingest, ordinal listing,
//! ordinal/sheet deletion, report assembly, and store hydration. All
//! mutators take `&mut self`, so the single-writer requirement is enforced
//! by the borrow checker.

use crate::error::{PipelineError, PipelineResult};
use crate::store::ProductStore;
use chrono::NaiveDate;
use pricebook_core::{CalcOptions, DerivedIndex, ProductInput, Registry, Sheet};
use pricebook_parser::{parse_block, split_blocks, ParseError};
use pricebook_report::{assemble, Report, ReportOptions};

/// How a batch reacts to a failing block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchMode {
    /// Any failing block aborts the whole batch before the registry is
    /// touched
    #[default]
    Atomic,
    /// Failing blocks are skipped and reported in the summary
    Lenient,
}

/// One block that failed normalization in a lenient batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFailure {
    /// Position of the block in the batch
    pub index: usize,
    pub error: ParseError,
}

/// Outcome of a batch ingest
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngestSummary {
    /// Products accepted from this batch
    pub added: usize,
    /// Live products after the batch
    pub total: usize,
    /// Blocks skipped (lenient mode only)
    pub skipped: Vec<BlockFailure>,
}

/// One line of the ordinal listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub sheet: Sheet,
    pub ordinal: usize,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub brand: Option<String>,
}

/// The live product set and everything callers do with it.
#[derive(Debug, Default)]
pub struct ProductBook {
    registry: Registry,
    calc: CalcOptions,
}

impl ProductBook {
    /// An empty book with default calculation options
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty book with explicit calculation options
    pub fn with_options(calc: CalcOptions) -> Self {
        Self {
            registry: Registry::new(),
            calc,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn calc_options(&self) -> &CalcOptions {
        &self.calc
    }

    /// Parse a batch message and append its products.
    ///
    /// Every candidate block is parsed and normalized before the registry
    /// is touched, so a failing batch in atomic mode leaves no trace.
    /// Segments without a `Date:` line are dropped silently either way.
    pub fn ingest(&mut self, text: &str, mode: BatchMode) -> PipelineResult<IngestSummary> {
        let blocks = split_blocks(text);
        let mut accepted = Vec::with_capacity(blocks.len());
        let mut skipped = Vec::new();

        for (index, block) in blocks.iter().enumerate() {
            match parse_block(block) {
                Ok(input) => accepted.push(input),
                Err(source) => match mode {
                    BatchMode::Atomic => {
                        return Err(PipelineError::Block { index, source });
                    }
                    BatchMode::Lenient => {
                        tracing::warn!(index, error = %source, "skipping block");
                        skipped.push(BlockFailure {
                            index,
                            error: source,
                        });
                    }
                },
            }
        }

        let added = accepted.len();
        for input in accepted {
            self.registry.insert(input);
        }
        tracing::debug!(added, total = self.registry.len(), "ingested batch");

        Ok(IngestSummary {
            added,
            total: self.registry.len(),
            skipped,
        })
    }

    /// Current products with their sheet and ordinal, in report order.
    pub fn list(&self) -> Vec<ListingEntry> {
        let index = DerivedIndex::build(&self.registry);
        let mut entries = Vec::with_capacity(self.registry.len());
        for sheet in Sheet::ALL {
            for entry in index.entries(sheet) {
                // positions come from the index, so the product exists
                if let Some(product) = self.registry.get(entry.position) {
                    entries.push(ListingEntry {
                        sheet,
                        ordinal: entry.ordinal,
                        date: product.date,
                        category: product.category.clone(),
                        brand: product.brand.clone(),
                    });
                }
            }
        }
        entries
    }

    /// Delete one product by sheet name and ordinal.
    pub fn delete(&mut self, sheet_name: &str, ordinal: usize) -> PipelineResult<ProductInput> {
        Ok(self.registry.delete(sheet_name, ordinal)?)
    }

    /// Delete every product in a sheet; returns how many went.
    pub fn delete_sheet(&mut self, sheet_name: &str) -> PipelineResult<usize> {
        Ok(self.registry.delete_all(sheet_name)?)
    }

    /// Drop all products.
    pub fn clear(&mut self) {
        self.registry.clear();
    }

    /// Assemble the grouped report for the current state.
    pub fn report(&self, options: &ReportOptions) -> Report {
        assemble(&self.registry, &self.calc, options)
    }

    /// Push every computed row to a store, sheet by sheet.
    pub fn persist<S: ProductStore>(&self, store: &mut S) -> PipelineResult<usize> {
        let mut written = 0;
        for (sheet, rows) in self.registry.rebuild(&self.calc) {
            for row in &rows {
                store.insert(sheet.name(), row)?;
                written += 1;
            }
        }
        Ok(written)
    }

    /// Load previously computed rows back into the registry.
    ///
    /// Only the input portion is kept: classification and derived fields
    /// are recomputed on every read regardless of what was stored.
    pub fn hydrate<S: ProductStore>(&mut self, store: &mut S) -> PipelineResult<usize> {
        let mut loaded = 0;
        for sheet in Sheet::ALL {
            for row in store.fetch_all(sheet.name())? {
                self.registry.insert(row.input);
                loaded += 1;
            }
        }
        Ok(loaded)
    }
}
