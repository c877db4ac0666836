//! Derived ordinal index
//!
//! A pure projection of a registry snapshot: per sheet, members are sorted
//! by date ascending (missing dates last, ties keep insertion order) and
//! assigned dense 1-based ordinals. The index carries no state of its own
//! and is never persisted; every read that needs ordinal addressing
//! rebuilds it, so classification changes can never go stale.

use crate::classify::Sheet;
use crate::registry::Registry;
use ahash::AHashMap;
use chrono::NaiveDate;

/// One index entry: user-facing ordinal and registry position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// 1-based row address within the sheet, after date sorting
    pub ordinal: usize,
    /// Position in the registry's insertion order
    pub position: usize,
}

/// Sheet-to-ordinal mapping for one registry snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedIndex {
    by_sheet: AHashMap<Sheet, Vec<IndexEntry>>,
}

impl DerivedIndex {
    /// Build the index for the registry's current state.
    pub fn build(registry: &Registry) -> Self {
        let mut members: AHashMap<Sheet, Vec<(usize, Option<NaiveDate>)>> = AHashMap::new();
        for (position, product) in registry.iter().enumerate() {
            members
                .entry(product.sheet())
                .or_default()
                .push((position, product.date));
        }

        let by_sheet = members
            .into_iter()
            .map(|(sheet, mut sheet_members)| {
                // (false, Some(date)) sorts before (true, None); the sort is
                // stable, so equal dates keep insertion order
                sheet_members.sort_by_key(|&(_, date)| (date.is_none(), date));
                let entries = sheet_members
                    .into_iter()
                    .enumerate()
                    .map(|(i, (position, _))| IndexEntry {
                        ordinal: i + 1,
                        position,
                    })
                    .collect();
                (sheet, entries)
            })
            .collect();

        Self { by_sheet }
    }

    /// Entries for a sheet, in ordinal order; empty when the sheet has none.
    pub fn entries(&self, sheet: Sheet) -> &[IndexEntry] {
        self.by_sheet.get(&sheet).map_or(&[], Vec::as_slice)
    }

    /// Number of rows currently in a sheet.
    pub fn sheet_len(&self, sheet: Sheet) -> usize {
        self.entries(sheet).len()
    }

    /// Resolve an ordinal to its registry position.
    pub fn resolve(&self, sheet: Sheet, ordinal: usize) -> Option<usize> {
        self.entries(sheet)
            .iter()
            .find(|entry| entry.ordinal == ordinal)
            .map(|entry| entry.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductInput;
    use pretty_assertions::assert_eq;

    fn product(category: &str, date: Option<&str>) -> ProductInput {
        let mut input = ProductInput::new(10.0, 1000.0);
        input.category = Some(category.into());
        input.date = date.map(|d| {
            NaiveDate::parse_from_str(d, "%Y-%m-%d").expect("test date is valid")
        });
        input
    }

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry.insert(product("Oil", Some("2025-11-24")));
        registry.insert(product("Milk", Some("2025-11-20")));
        registry.insert(product("Oil", Some("2025-11-01")));
        registry.insert(product("Oil", None));
        registry.insert(product("Snacks", Some("2025-11-10")));
        registry
    }

    #[test]
    fn test_ordinals_follow_date_order() {
        let registry = sample_registry();
        let index = DerivedIndex::build(&registry);

        let oil = index.entries(Sheet::Oil);
        assert_eq!(oil.len(), 3);
        // 2025-11-01 first, then 2025-11-24, missing date last
        assert_eq!(oil[0], IndexEntry { ordinal: 1, position: 2 });
        assert_eq!(oil[1], IndexEntry { ordinal: 2, position: 0 });
        assert_eq!(oil[2], IndexEntry { ordinal: 3, position: 3 });
    }

    #[test]
    fn test_unmatched_category_lands_in_data() {
        let index = DerivedIndex::build(&sample_registry());
        assert_eq!(index.sheet_len(Sheet::Data), 1);
        assert_eq!(index.resolve(Sheet::Data, 1), Some(4));
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let registry = sample_registry();
        let first = DerivedIndex::build(&registry);
        let second = DerivedIndex::build(&registry);
        assert_eq!(first, second);
    }

    #[test]
    fn test_equal_dates_keep_insertion_order() {
        let mut registry = Registry::new();
        for _ in 0..4 {
            registry.insert(product("Milk", Some("2025-11-20")));
        }
        let index = DerivedIndex::build(&registry);
        let positions: Vec<usize> = index
            .entries(Sheet::Milk)
            .iter()
            .map(|entry| entry.position)
            .collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_resolve_out_of_range() {
        let index = DerivedIndex::build(&sample_registry());
        assert_eq!(index.resolve(Sheet::Oil, 0), None);
        assert_eq!(index.resolve(Sheet::Oil, 4), None);
        assert_eq!(index.resolve(Sheet::Toilet, 1), None);
    }
}
