//! Product records
//!
//! [`ProductInput`] is the normalized form of one parsed text block; it is
//! what the registry stores. [`ComputedProduct`] is an input plus every
//! engine-derived field, recomputed fresh on each read and never cached on
//! the entity.

use crate::classify::{classify, Sheet};
use chrono::NaiveDate;

/// Normalized fields of a single product block.
///
/// Buy-in and unit price are required (the normalizer rejects blocks
/// missing them); everything else is optional and defaults to empty/absent.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductInput {
    pub date: Option<NaiveDate>,
    pub address: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub brand: Option<String>,
    pub packaging: Option<String>,
    /// Unit size (ml or g), as entered
    pub size: Option<f64>,
    /// Units per carton
    pub packs: Option<u32>,
    /// Wholesale buy-in price per carton, USD (required)
    pub buy_in: f64,
    /// Promotional scheme base units
    pub scheme_base: Option<f64>,
    /// Free-of-charge bonus units
    pub foc: Option<f64>,
    /// Explicit discount percentage; overridden when scheme/FOC derive one
    pub discount_pct: Option<f64>,
    pub direct_disc_pct: Option<f64>,
    pub mark_up: Option<f64>,
    /// Explicit sell-out price, USD; kept as-is when supplied
    pub sell_out_usd: Option<f64>,
    /// Retail unit price in local currency (required)
    pub unit_price_local: f64,
    pub exchange_rate: Option<f64>,
}

impl ProductInput {
    /// Create a record from the two required fields; all others default.
    pub fn new(buy_in: f64, unit_price_local: f64) -> Self {
        Self {
            buy_in,
            unit_price_local,
            ..Default::default()
        }
    }

    /// The sheet this product currently classifies into.
    ///
    /// Computed fresh from the current category/sub-category every call, so
    /// correcting either field reclassifies the product with no migration.
    pub fn sheet(&self) -> Sheet {
        classify(self.category.as_deref(), self.sub_category.as_deref())
    }
}

/// A product with all derived pricing fields filled in.
///
/// Produced by [`compute`](crate::calc::compute); every monetary field has
/// already passed through [`round2`](crate::rounding::round2), so consumers
/// (report cells, stores) see exactly the audited figures.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputedProduct {
    pub input: ProductInput,
    /// Discount percentage, derived from scheme/FOC when possible
    pub discount_pct: f64,
    /// True when the percentage came from scheme/FOC rather than an
    /// explicit field; report formula mode keys off this
    pub derived_discount: bool,
    pub discount_value: f64,
    pub direct_disc_pct: f64,
    pub direct_disc_value: f64,
    pub net_buy_in: f64,
    /// Price per 100 units of measure; absent when size*packs is zero
    pub price_per_100: Option<f64>,
    pub weight_per_carton: f64,
    pub sell_out_usd: f64,
    /// True when sell-out was supplied rather than computed
    pub explicit_sell_out: bool,
    /// Exchange rate actually used (supplied or the configured default)
    pub exchange_rate: f64,
    pub sell_out_local: f64,
    /// Packs with the divide-by-zero guard applied (missing or 0 becomes 1)
    pub effective_packs: u32,
    pub margin_per_unit: f64,
    pub price_per_carton: f64,
    pub margin_per_carton: f64,
}

impl ComputedProduct {
    /// The sheet this product currently classifies into.
    pub fn sheet(&self) -> Sheet {
        self.input.sheet()
    }
}
