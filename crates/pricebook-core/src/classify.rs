//! Sheet classification
//!
//! A product's sheet is a pure function of its category and sub-category.
//! The sheet is never stored: every read reclassifies from the current
//! field values, so a corrected category takes effect immediately.

use std::fmt;

/// The fixed set of report sheets.
///
/// Declaration order is report order; `Data` is the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sheet {
    Oil,
    PowderDetergent,
    LiquidDetergent,
    Milk,
    Dishwash,
    FabricSoftener,
    EcoDishwash,
    Toilet,
    Data,
}

impl Sheet {
    /// All sheets, in report order
    pub const ALL: [Sheet; 9] = [
        Sheet::Oil,
        Sheet::PowderDetergent,
        Sheet::LiquidDetergent,
        Sheet::Milk,
        Sheet::Dishwash,
        Sheet::FabricSoftener,
        Sheet::EcoDishwash,
        Sheet::Toilet,
        Sheet::Data,
    ];

    /// User-facing sheet name
    pub fn name(&self) -> &'static str {
        match self {
            Sheet::Oil => "Oil",
            Sheet::PowderDetergent => "Powder Detergent",
            Sheet::LiquidDetergent => "Liquid Detergent",
            Sheet::Milk => "Milk",
            Sheet::Dishwash => "Dishwash",
            Sheet::FabricSoftener => "Fabric Softener",
            Sheet::EcoDishwash => "Eco Dishwash",
            Sheet::Toilet => "Toilet",
            Sheet::Data => "Data",
        }
    }

    /// Parse a user-supplied sheet name, case-insensitively.
    pub fn parse(name: &str) -> Option<Sheet> {
        let name = name.trim();
        Sheet::ALL
            .into_iter()
            .find(|sheet| sheet.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One classification rule: category keywords, optional sub-category
/// keywords, target sheet.
struct Rule {
    categories: &'static [&'static str],
    sub_categories: Option<&'static [&'static str]>,
    sheet: Sheet,
}

/// Rule order matters: keyword sets overlap ("detergent" appears twice),
/// and first match wins. An empty sub-category resolves "detergent" to the
/// powder rule by convention.
const RULES: &[Rule] = &[
    Rule {
        categories: &["oil", "cooking oil", "palm oil"],
        sub_categories: None,
        sheet: Sheet::Oil,
    },
    Rule {
        categories: &["detergent"],
        sub_categories: Some(&["powder", ""]),
        sheet: Sheet::PowderDetergent,
    },
    Rule {
        categories: &["detergent"],
        sub_categories: Some(&["liquid"]),
        sheet: Sheet::LiquidDetergent,
    },
    Rule {
        categories: &["milk"],
        sub_categories: None,
        sheet: Sheet::Milk,
    },
    Rule {
        categories: &["dishwash"],
        sub_categories: None,
        sheet: Sheet::Dishwash,
    },
    Rule {
        categories: &["fabric softener"],
        sub_categories: None,
        sheet: Sheet::FabricSoftener,
    },
    Rule {
        categories: &["eco dishwash"],
        sub_categories: None,
        sheet: Sheet::EcoDishwash,
    },
    Rule {
        categories: &["toilet"],
        sub_categories: None,
        sheet: Sheet::Toilet,
    },
];

/// Map a category/sub-category pair to its sheet.
///
/// Total and pure: inputs are trimmed and lowercased, missing fields are
/// treated as empty, and anything matching no rule lands in [`Sheet::Data`].
pub fn classify(category: Option<&str>, sub_category: Option<&str>) -> Sheet {
    let category = category.unwrap_or("").trim().to_lowercase();
    let sub_category = sub_category.unwrap_or("").trim().to_lowercase();

    for rule in RULES {
        if rule.categories.contains(&category.as_str())
            && rule
                .sub_categories
                .map_or(true, |subs| subs.contains(&sub_category.as_str()))
        {
            return rule.sheet;
        }
    }
    Sheet::Data
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_oil_synonyms() {
        assert_eq!(classify(Some("Oil"), None), Sheet::Oil);
        assert_eq!(classify(Some("cooking oil"), Some("Soybean")), Sheet::Oil);
        assert_eq!(classify(Some(" Palm Oil "), None), Sheet::Oil);
    }

    #[test]
    fn test_classify_detergent_split_on_sub_category() {
        assert_eq!(
            classify(Some("Detergent"), Some("Powder")),
            Sheet::PowderDetergent
        );
        assert_eq!(
            classify(Some("Detergent"), Some("Liquid")),
            Sheet::LiquidDetergent
        );
    }

    #[test]
    fn test_classify_detergent_empty_sub_category_is_powder() {
        assert_eq!(classify(Some("Detergent"), None), Sheet::PowderDetergent);
        assert_eq!(
            classify(Some("Detergent"), Some("  ")),
            Sheet::PowderDetergent
        );
    }

    #[test]
    fn test_classify_is_total() {
        assert_eq!(classify(None, None), Sheet::Data);
        assert_eq!(classify(Some("Snacks"), Some("Chips")), Sheet::Data);
        assert_eq!(classify(Some(""), Some("")), Sheet::Data);
    }

    #[test]
    fn test_classify_is_pure() {
        let first = classify(Some("Milk"), Some("Condensed"));
        for _ in 0..3 {
            assert_eq!(classify(Some("Milk"), Some("Condensed")), first);
        }
        assert_eq!(first, Sheet::Milk);
    }

    #[test]
    fn test_sheet_parse_round_trips_names() {
        for sheet in Sheet::ALL {
            assert_eq!(Sheet::parse(sheet.name()), Some(sheet));
        }
        assert_eq!(Sheet::parse("powder detergent"), Some(Sheet::PowderDetergent));
        assert_eq!(Sheet::parse("Unknown"), None);
    }
}
