//! # pricebook-report
//!
//! Assembles the grouped, auditable report: per sheet, a date-sorted list
//! of rows over a fixed 26-column set. Every derived cell can render in
//! two numerically equivalent modes:
//!
//! - **Literal**: the engine's value formatted with its unit suffix
//!   (`"22.5 $"`, `"12 L"`).
//! - **Formula**: a same-row spreadsheet expression over sibling columns
//!   that recomputes the identical quantity, wrapping each step in an
//!   expression reproducing the engine's rounding rules exactly.
//!
//! When the engine took a branch a sibling-reference formula cannot
//! express (explicit sell-out, missing scheme/FOC, missing packs), the
//! cell falls back to the literal: equivalence is the contract, symmetry
//! is not.

mod assemble;
mod cell;
mod column;
mod formula;

pub use assemble::{assemble, Report, ReportOptions, Row, SheetReport, FIRST_DATA_ROW};
pub use cell::{CellContent, RenderMode};
pub use column::{Column, ColumnFormat, Section};
pub use formula::{round2_expr, round_weight_expr};
