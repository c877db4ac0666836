//! The pricing calculation engine
//!
//! Applies the formula chain in strict dependency order, each step
//! consuming only already-computed upstream values. Every monetary step is
//! passed through [`round2`] before downstream steps consume it; this is
//! what lets the report's formula cells reproduce the engine exactly, the
//! way a spreadsheet recomputing from visible figures would.
//!
//! Formula chain (WHOLESALE BUY-IN, WHOLESALE SELL-OUT, RETAIL):
//! 1. `discount_pct  = 100 * foc / (scheme_base + foc)` when both present
//!    and the sum is nonzero, else the explicit percentage, else 0
//! 2. `discount_value   = buy_in * discount_pct / 100`
//! 3. `direct_disc_value = buy_in * direct_disc_pct / 100`
//! 4. `net_buy_in       = buy_in - (discount_value + direct_disc_value)`
//! 5. `price_per_100    = net_buy_in / ((size * packs) / 100)` when positive
//! 6. `weight_per_carton = round_weight((size * packs) / 1000)`
//! 7. `sell_out_usd     = net_buy_in + mark_up` unless supplied explicitly
//! 8. `sell_out_local   = sell_out_usd * exchange_rate`
//! 9. `margin_per_unit  = unit_price_local - sell_out_local / packs`
//! 10. `price_per_carton = unit_price_local * packs`
//! 11. `margin_per_carton = price_per_carton - sell_out_local`

use crate::product::{ComputedProduct, ProductInput};
use crate::rounding::{round2, round_weight};

/// Options for the calculation engine
#[derive(Debug, Clone)]
pub struct CalcOptions {
    /// Exchange rate used when a block does not supply one (USD to local)
    pub default_exchange_rate: f64,
}

impl Default for CalcOptions {
    fn default() -> Self {
        Self {
            default_exchange_rate: 4100.0,
        }
    }
}

/// Derive all pricing fields for one product.
///
/// Never fails: optional inputs that are absent contribute zero, and
/// derived fields whose denominator would be zero are skipped (`None`) or
/// guarded (packs falls back to 1 for the per-unit division).
pub fn compute(input: &ProductInput, options: &CalcOptions) -> ComputedProduct {
    let buy_in = input.buy_in;

    // WHOLESALE BUY-IN
    let derived_pct = match (input.scheme_base, input.foc) {
        (Some(scheme), Some(foc)) if scheme + foc != 0.0 => {
            Some(round2(100.0 * foc / (scheme + foc)))
        }
        _ => None,
    };
    let derived_discount = derived_pct.is_some();
    let discount_pct = derived_pct.unwrap_or_else(|| input.discount_pct.unwrap_or(0.0));

    let discount_value = round2(buy_in * discount_pct / 100.0);
    let direct_disc_pct = input.direct_disc_pct.unwrap_or(0.0);
    let direct_disc_value = round2(buy_in * direct_disc_pct / 100.0);
    let net_buy_in = round2(buy_in - (discount_value + direct_disc_value));

    let total_units = input.size.unwrap_or(0.0) * input.packs.unwrap_or(0) as f64;
    let price_per_100 = if total_units > 0.0 {
        Some(round2(net_buy_in / (total_units / 100.0)))
    } else {
        None
    };
    let weight_per_carton = round_weight(total_units / 1000.0);

    // WHOLESALE SELL-OUT
    let explicit_sell_out = input.sell_out_usd.is_some();
    let sell_out_usd = match input.sell_out_usd {
        Some(explicit) => explicit,
        None => round2(net_buy_in + input.mark_up.unwrap_or(0.0)),
    };
    let exchange_rate = input
        .exchange_rate
        .unwrap_or(options.default_exchange_rate);
    let sell_out_local = round2(sell_out_usd * exchange_rate);

    // RETAIL
    let effective_packs = input.packs.filter(|&p| p >= 1).unwrap_or(1);
    let margin_per_unit = round2(input.unit_price_local - sell_out_local / effective_packs as f64);
    let price_per_carton = round2(input.unit_price_local * effective_packs as f64);
    let margin_per_carton = round2(price_per_carton - sell_out_local);

    ComputedProduct {
        input: input.clone(),
        discount_pct,
        derived_discount,
        discount_value,
        direct_disc_pct,
        direct_disc_value,
        net_buy_in,
        price_per_100,
        weight_per_carton,
        sell_out_usd,
        explicit_sell_out,
        exchange_rate,
        sell_out_local,
        effective_packs,
        margin_per_unit,
        price_per_carton,
        margin_per_carton,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn oil_example() -> ProductInput {
        // The worked example: 1000ml x 12 soybean oil
        let mut input = ProductInput::new(22.50, 9000.0);
        input.category = Some("Oil".into());
        input.size = Some(1000.0);
        input.packs = Some(12);
        input.scheme_base = Some(4.0);
        input.foc = Some(0.0);
        input.direct_disc_pct = Some(0.0);
        input.mark_up = Some(0.50);
        input
    }

    #[test]
    fn test_worked_example() {
        let computed = compute(&oil_example(), &CalcOptions::default());

        assert_eq!(computed.discount_pct, 0.0);
        assert!(computed.derived_discount);
        assert_eq!(computed.discount_value, 0.0);
        assert_eq!(computed.net_buy_in, 22.50);
        assert_eq!(computed.sell_out_usd, 23.00);
        assert_eq!(computed.weight_per_carton, 12.0);
        // 22.50 / (12000 / 100) = 0.1875, third digit 7 steps up
        assert_eq!(computed.price_per_100, Some(0.19));
    }

    #[test]
    fn test_local_currency_chain() {
        let computed = compute(&oil_example(), &CalcOptions::default());

        assert_eq!(computed.exchange_rate, 4100.0);
        assert_eq!(computed.sell_out_local, 23.0 * 4100.0);
        // 9000 - 94300/12 = 1141.666... -> third digit 6 steps up
        assert_eq!(computed.margin_per_unit, 1141.67);
        assert_eq!(computed.price_per_carton, 108_000.0);
        assert_eq!(computed.margin_per_carton, 108_000.0 - 94_300.0);
    }

    #[test]
    fn test_scheme_foc_derives_discount() {
        let mut input = oil_example();
        input.scheme_base = Some(4.0);
        input.foc = Some(1.0);
        // an explicit percentage loses to the derived one
        input.discount_pct = Some(50.0);

        let computed = compute(&input, &CalcOptions::default());
        assert_eq!(computed.discount_pct, 20.0);
        assert_eq!(computed.discount_value, 4.5);
        assert_eq!(computed.net_buy_in, 18.0);
    }

    #[test]
    fn test_explicit_discount_fallback() {
        let mut input = oil_example();
        input.scheme_base = None;
        input.foc = None;
        input.discount_pct = Some(10.0);

        let computed = compute(&input, &CalcOptions::default());
        assert!(!computed.derived_discount);
        assert_eq!(computed.discount_pct, 10.0);
        assert_eq!(computed.discount_value, 2.25);
    }

    #[test]
    fn test_explicit_sell_out_kept_as_is() {
        let mut input = oil_example();
        input.sell_out_usd = Some(25.55);

        let computed = compute(&input, &CalcOptions::default());
        assert!(computed.explicit_sell_out);
        assert_eq!(computed.sell_out_usd, 25.55);
    }

    #[test]
    fn test_missing_size_skips_unit_price() {
        let mut input = oil_example();
        input.size = None;

        let computed = compute(&input, &CalcOptions::default());
        assert_eq!(computed.price_per_100, None);
        assert_eq!(computed.weight_per_carton, 0.0);
    }

    #[test]
    fn test_missing_packs_guards_divisions() {
        let mut input = oil_example();
        input.packs = None;

        let computed = compute(&input, &CalcOptions::default());
        assert_eq!(computed.effective_packs, 1);
        assert_eq!(computed.price_per_carton, 9000.0);
        assert_eq!(computed.price_per_100, None);
    }

    #[test]
    fn test_supplied_exchange_rate_wins() {
        let mut input = oil_example();
        input.exchange_rate = Some(4000.0);

        let computed = compute(&input, &CalcOptions::default());
        assert_eq!(computed.exchange_rate, 4000.0);
        assert_eq!(computed.sell_out_local, 92_000.0);
    }
}
