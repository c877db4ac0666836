//! Value coercion
//!
//! Lenient by contract: raw values carry currency symbols, percent signs,
//! unit suffixes, and trailing comments. Coercion strips everything that is
//! not part of a number and yields `None` (never an error) when nothing
//! usable remains; requiredness is enforced one level up, per field.

use chrono::{Datelike, NaiveDate};

/// Day-first date formats accepted for the `Date:` field.
///
/// `%Y` also consumes two-digit years; those are widened to 20xx below.
const DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y"];

/// Coerce strings like `"15.90$"`, `"1,5 KHR"`, `" 0.5 "` to a number.
///
/// Commas are decimal separators; all characters other than digits, dots,
/// and minus signs are discarded. Degenerate leftovers (`"-"`, `"."`, …)
/// and anything that still fails to parse yield `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let decimalized = raw.trim().replace(',', ".");
    let cleaned: String = decimalized
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match cleaned.as_str() {
        "" | "-" | "." | "-." | ".-" => None,
        _ => cleaned.parse().ok(),
    }
}

/// Coerce an integer count field; fractional values truncate.
pub fn parse_count(raw: &str) -> Option<u32> {
    parse_number(raw)
        .map(f64::trunc)
        .filter(|&n| n >= 0.0)
        .map(|n| n as u32)
}

/// Parse a day-first date; unparsable input is `None`, not fatal.
///
/// Missing dates sort last downstream.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let parsed = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())?;
    if parsed.year() < 100 {
        parsed.with_year(parsed.year() + 2000)
    } else {
        Some(parsed)
    }
}
