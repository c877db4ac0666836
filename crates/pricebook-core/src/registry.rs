//! The product registry
//!
//! An insertion-ordered collection of [`ProductInput`]; the sole source of
//! truth for live products. Identity is positional, so every delete is
//! addressed through a freshly built [`DerivedIndex`]. All mutators take
//! `&mut self`: the single-writer requirement is enforced by the borrow
//! checker rather than by convention.

use crate::calc::{compute, CalcOptions};
use crate::classify::Sheet;
use crate::error::{Error, Result};
use crate::index::DerivedIndex;
use crate::product::{ComputedProduct, ProductInput};
use std::collections::BTreeMap;

/// Per-sheet computed rows, in sheet and ordinal order
pub type SheetRows = BTreeMap<Sheet, Vec<ComputedProduct>>;

/// Ordered collection of live products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    products: Vec<ProductInput>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product; normalization has already validated it.
    pub fn insert(&mut self, input: ProductInput) {
        self.products.push(input);
    }

    /// Number of live products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate products in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ProductInput> {
        self.products.iter()
    }

    /// Product at a registry position
    pub fn get(&self, position: usize) -> Option<&ProductInput> {
        self.products.get(position)
    }

    /// Remove the product addressed by `(sheet_name, ordinal)`.
    ///
    /// Rebuilds the derived index first; an unknown sheet name or an
    /// ordinal outside the sheet's current range fails without mutating.
    pub fn delete(&mut self, sheet_name: &str, ordinal: usize) -> Result<ProductInput> {
        let sheet = Sheet::parse(sheet_name)
            .ok_or_else(|| Error::SheetNotFound(sheet_name.to_string()))?;
        let index = DerivedIndex::build(self);
        let position = index
            .resolve(sheet, ordinal)
            .ok_or(Error::OrdinalNotFound {
                sheet,
                ordinal,
                len: index.sheet_len(sheet),
            })?;
        let removed = self.products.remove(position);
        tracing::debug!(sheet = sheet.name(), ordinal, "deleted product");
        Ok(removed)
    }

    /// Remove every product currently classifying into `sheet_name`.
    pub fn delete_all(&mut self, sheet_name: &str) -> Result<usize> {
        let sheet = Sheet::parse(sheet_name)
            .ok_or_else(|| Error::SheetNotFound(sheet_name.to_string()))?;
        let before = self.products.len();
        self.products.retain(|product| product.sheet() != sheet);
        let removed = before - self.products.len();
        if removed == 0 {
            return Err(Error::SheetEmpty(sheet));
        }
        tracing::debug!(sheet = sheet.name(), removed, "deleted sheet");
        Ok(removed)
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.products.clear();
    }

    /// Recompute classification and calculation for every product and group
    /// the rows per sheet, in ordinal order.
    ///
    /// Nothing is cached between mutations, so this is called after every
    /// one: O(N log N) per mutation, traded for the guarantee that no
    /// stale classification or stale derived field can survive an edit.
    pub fn rebuild(&self, options: &CalcOptions) -> SheetRows {
        let index = DerivedIndex::build(self);
        let mut sheets = SheetRows::new();
        for sheet in Sheet::ALL {
            let entries = index.entries(sheet);
            if entries.is_empty() {
                continue;
            }
            let rows = entries
                .iter()
                .map(|entry| compute(&self.products[entry.position], options))
                .collect();
            sheets.insert(sheet, rows);
        }
        tracing::debug!(products = self.products.len(), sheets = sheets.len(), "rebuilt sheet rows");
        sheets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn product(category: &str, day: u32) -> ProductInput {
        let mut input = ProductInput::new(10.0, 1000.0);
        input.category = Some(category.into());
        input.date = NaiveDate::from_ymd_opt(2025, 11, day);
        input
    }

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry.insert(product("Oil", 24));
        registry.insert(product("Oil", 1));
        registry.insert(product("Milk", 20));
        registry.insert(product("Oil", 10));
        registry
    }

    #[test]
    fn test_delete_by_ordinal_keeps_ordinals_dense() {
        let mut registry = sample_registry();

        // ordinal 2 in Oil is the day-10 product
        let removed = registry.delete("Oil", 2).unwrap();
        assert_eq!(removed.date, NaiveDate::from_ymd_opt(2025, 11, 10));
        assert_eq!(registry.len(), 3);

        let index = DerivedIndex::build(&registry);
        let ordinals: Vec<usize> = index
            .entries(Sheet::Oil)
            .iter()
            .map(|entry| entry.ordinal)
            .collect();
        assert_eq!(ordinals, vec![1, 2]);
    }

    #[test]
    fn test_delete_unknown_sheet_is_not_found() {
        let mut registry = sample_registry();
        assert_eq!(
            registry.delete("Candles", 1),
            Err(Error::SheetNotFound("Candles".into()))
        );
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_delete_out_of_range_ordinal_leaves_registry_untouched() {
        let mut registry = sample_registry();
        assert_eq!(
            registry.delete("Oil", 9),
            Err(Error::OrdinalNotFound {
                sheet: Sheet::Oil,
                ordinal: 9,
                len: 3,
            })
        );
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_delete_sheet_name_is_case_insensitive() {
        let mut registry = sample_registry();
        assert!(registry.delete("oil", 1).is_ok());
    }

    #[test]
    fn test_delete_all() {
        let mut registry = sample_registry();
        assert_eq!(registry.delete_all("Oil"), Ok(3));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.delete_all("Oil"),
            Err(Error::SheetEmpty(Sheet::Oil))
        );
    }

    #[test]
    fn test_rebuild_groups_in_ordinal_order() {
        let registry = sample_registry();
        let sheets = registry.rebuild(&CalcOptions::default());

        assert_eq!(sheets.len(), 2);
        let oil = &sheets[&Sheet::Oil];
        let days: Vec<u32> = oil
            .iter()
            .filter_map(|row| row.input.date)
            .map(|date| chrono::Datelike::day(&date))
            .collect();
        assert_eq!(days, vec![1, 10, 24]);
    }

    #[test]
    fn test_rebuild_reflects_category_edits() {
        // the sheet is never stored: reclassification happens on read
        let mut registry = sample_registry();
        let sheets = registry.rebuild(&CalcOptions::default());
        assert_eq!(sheets[&Sheet::Oil].len(), 3);

        registry.products[0].category = Some("Milk".into());
        let sheets = registry.rebuild(&CalcOptions::default());
        assert_eq!(sheets[&Sheet::Oil].len(), 2);
        assert_eq!(sheets[&Sheet::Milk].len(), 2);
    }
}
