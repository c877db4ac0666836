//! Cell content and literal formatting

use crate::column::ColumnFormat;
use chrono::NaiveDate;

/// How derived cells are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Formatted values with unit suffixes
    #[default]
    Literal,
    /// Same-row spreadsheet expressions where the engine's branch allows;
    /// input cells become bare numbers so references resolve
    Formula,
}

/// One rendered cell: a formatted literal or a formula string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellContent {
    #[default]
    Empty,
    Text(String),
    /// A spreadsheet expression; rendered with a leading `=`
    Formula(String),
}

impl CellContent {
    /// The cell as the string a sink would write
    pub fn render(&self) -> String {
        match self {
            CellContent::Empty => String::new(),
            CellContent::Text(text) => text.clone(),
            CellContent::Formula(expr) => format!("={expr}"),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellContent::Empty)
    }
}

/// Format a number with trailing zeros trimmed, e.g. `22.5`, `12`, `0.19`.
pub(crate) fn fmt_number(value: f64) -> String {
    let mut text = format!("{value:.4}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Format a literal value under a column format, suffixing units.
pub(crate) fn literal(value: f64, format: ColumnFormat, local_currency: &str) -> CellContent {
    let text = match format {
        ColumnFormat::CurrencyUsd => format!("{} $", fmt_number(value)),
        ColumnFormat::CurrencyLocal => format!("{} {local_currency}", fmt_number(value)),
        ColumnFormat::Percent => format!("{} %", fmt_number(value)),
        ColumnFormat::Unit(unit) => format!("{} {unit}", fmt_number(value)),
        ColumnFormat::Integer => format!("{}", value.trunc() as i64),
        _ => fmt_number(value),
    };
    CellContent::Text(text)
}

/// A bare number, for formula-mode input cells.
pub(crate) fn bare(value: f64) -> CellContent {
    CellContent::Text(fmt_number(value))
}

/// A date cell, day-first like the input format.
pub(crate) fn date_cell(date: Option<NaiveDate>) -> CellContent {
    match date {
        Some(date) => CellContent::Text(date.format("%d.%m.%Y").to_string()),
        None => CellContent::Empty,
    }
}

/// An optional text cell.
pub(crate) fn text_cell(value: Option<&str>) -> CellContent {
    match value {
        Some(text) => CellContent::Text(text.to_string()),
        None => CellContent::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fmt_number_trims() {
        assert_eq!(fmt_number(22.5), "22.5");
        assert_eq!(fmt_number(12.0), "12");
        assert_eq!(fmt_number(0.19), "0.19");
        assert_eq!(fmt_number(0.0), "0");
    }

    #[test]
    fn test_literal_suffixes() {
        assert_eq!(
            literal(22.5, ColumnFormat::CurrencyUsd, "KHR"),
            CellContent::Text("22.5 $".into())
        );
        assert_eq!(
            literal(94_300.0, ColumnFormat::CurrencyLocal, "KHR"),
            CellContent::Text("94300 KHR".into())
        );
        assert_eq!(
            literal(12.0, ColumnFormat::Unit("L"), "KHR"),
            CellContent::Text("12 L".into())
        );
    }

    #[test]
    fn test_render() {
        assert_eq!(CellContent::Empty.render(), "");
        assert_eq!(CellContent::Formula("Q3+S3".into()).render(), "=Q3+S3");
    }
}
