//! Spreadsheet renderings of the rounding rules
//!
//! A formula-mode cell must recompute exactly what the engine computed,
//! including the non-standard rounding, so each derived expression is
//! wrapped in one of these. `SIGN`/`ABS` keep the truncation and the
//! digit inspection working away-from-zero for negative margins, where
//! `TRUNC` and `MOD` alone would diverge.

/// Wrap `inner` in the monetary rounding rule.
///
/// Truncate to two decimals, stepping one cent away from zero when the
/// third decimal digit is 6-9.
pub fn round2_expr(inner: &str) -> String {
    format!(
        "SIGN({inner})*(TRUNC(ABS({inner})*100)+IF(MOD(TRUNC(ABS({inner})*1000),10)>=6,1,0))/100"
    )
}

/// Wrap `inner` in the carton-weight rounding rule.
///
/// Leading fractional digit 0 leaves the value unchanged; 1-5 truncates;
/// 6-9 rounds up to the next integer.
pub fn round_weight_expr(inner: &str) -> String {
    format!(
        "IF(MOD(TRUNC(ABS({inner})*10),10)=0,{inner},\
SIGN({inner})*(TRUNC(ABS({inner}))+IF(MOD(TRUNC(ABS({inner})*10),10)>=6,1,0)))"
    )
}
