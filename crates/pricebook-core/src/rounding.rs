//! The two non-standard rounding rules
//!
//! Both rules are deliberate, reproduced from the reference pricing sheets:
//! do not replace them with half-up or banker's rounding. [`round2`] examines
//! the third decimal digit and only steps the two-decimal value up when that
//! digit is 6-9; [`round_weight`] applies the analogous rule to the leading
//! fractional digit of a near-integer carton weight, with the extra quirk
//! that a leading 0 returns the value unchanged.

/// Snap a scaled value to the nearest integer when float representation
/// noise put it within epsilon of one, otherwise truncate.
///
/// `1.236_f64 * 1000.0` is `1235.9999…`; without snapping the digit
/// inspection below would read 5 instead of 6.
fn snap_to_digits(scaled: f64) -> f64 {
    let nearest = scaled.round();
    if (scaled - nearest).abs() < 1e-6 {
        nearest
    } else {
        scaled.trunc()
    }
}

/// Monetary rounding: truncate to two decimals, stepping the last cent one
/// unit away from zero only when the third decimal digit is 6-9.
///
/// ```rust
/// use pricebook_core::round2;
///
/// assert_eq!(round2(1.236), 1.24);
/// assert_eq!(round2(1.235), 1.23);
/// assert_eq!(round2(1.230), 1.23);
/// ```
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let thousandths = snap_to_digits(value.abs() * 1000.0);
    let third_digit = (thousandths % 10.0) as u8;
    let mut cents = (thousandths / 10.0).trunc();
    if third_digit >= 6 {
        cents += 1.0;
    }
    let rounded = cents / 100.0;
    if value < 0.0 {
        -rounded
    } else {
        rounded
    }
}

/// Carton-weight rounding for values expected near a whole number.
///
/// Leading fractional digit 0 returns the value unchanged (including any
/// further decimals); 1-5 truncates to the integer part; 6-9 rounds up to
/// the next integer.
pub fn round_weight(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let tenths = snap_to_digits(value.abs() * 10.0);
    let leading_digit = (tenths % 10.0) as u8;
    let whole = (tenths / 10.0).trunc();
    let rounded = match leading_digit {
        0 => return value,
        1..=5 => whole,
        _ => whole + 1.0,
    };
    if value < 0.0 {
        -rounded
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_round2_bands() {
        // third digit 0: truncate
        assert_eq!(round2(1.230), 1.23);
        // third digit 1-5: truncate
        assert_eq!(round2(1.231), 1.23);
        assert_eq!(round2(1.235), 1.23);
        // third digit 6-9: step up
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(1.239), 1.24);
    }

    #[test]
    fn test_round2_away_from_zero_for_negatives() {
        assert_eq!(round2(-1.236), -1.24);
        assert_eq!(round2(-1.235), -1.23);
    }

    #[test]
    fn test_round2_price_per_100_case() {
        // 22.50 / (12000 / 100)
        assert_eq!(round2(0.1875), 0.19);
    }

    #[test]
    fn test_round2_two_decimal_values_pass_through() {
        assert_eq!(round2(22.5), 22.5);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_round2_idempotent() {
        for &v in &[1.236, 1.235, 0.1875, -3.14159, 9999.999, 0.005, 0.006] {
            let once = round2(v);
            assert_eq!(round2(once), once, "round2 not idempotent for {v}");
        }
    }

    #[test]
    fn test_round_weight_digit_zero_unchanged() {
        assert_eq!(round_weight(12.0), 12.0);
        // digit 0 returns the value as-is, further decimals included
        assert_eq!(round_weight(12.05), 12.05);
    }

    #[test]
    fn test_round_weight_truncation_band() {
        assert_eq!(round_weight(18.1), 18.0);
        assert_eq!(round_weight(18.5), 18.0);
    }

    #[test]
    fn test_round_weight_round_up_band() {
        assert_eq!(round_weight(18.6), 19.0);
        assert_eq!(round_weight(18.72), 19.0);
        assert_eq!(round_weight(18.9), 19.0);
    }

    proptest! {
        #[test]
        fn prop_round2_idempotent(v in -100_000.0f64..100_000.0) {
            let once = round2(v);
            prop_assert_eq!(round2(once), once);
        }

        #[test]
        fn prop_round2_never_below_truncation(v in 0.0f64..100_000.0) {
            let truncated = (v * 100.0).trunc() / 100.0;
            prop_assert!(round2(v) + 1e-9 >= truncated);
        }
    }
}
