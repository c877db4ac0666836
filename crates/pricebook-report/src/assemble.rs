//! Report assembly
//!
//! Groups computed rows per sheet (via the registry's rebuild, so row order
//! always agrees with ordinal addressing) and renders each row over the
//! fixed column set in the requested mode.

use crate::cell::{bare, date_cell, literal, text_cell, CellContent, RenderMode};
use crate::column::Column;
use crate::formula::{round2_expr, round_weight_expr};
use pricebook_core::{CalcOptions, ComputedProduct, Registry, Sheet};

/// First data row in a sheet; rows 1 and 2 are the section band and the
/// column headers.
pub const FIRST_DATA_ROW: u32 = 3;

/// Options for report assembly
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub mode: RenderMode,
    /// Suffix for local-currency literals
    pub local_currency: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::Literal,
            local_currency: "KHR".to_string(),
        }
    }
}

/// One rendered row: a cell per [`Column::ALL`] entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: Vec<CellContent>,
}

impl Row {
    /// Cell content for a column
    pub fn get(&self, column: Column) -> &CellContent {
        &self.cells[column.index()]
    }

    /// Cells in column order
    pub fn cells(&self) -> &[CellContent] {
        &self.cells
    }
}

/// All rows of one sheet, in ordinal order
#[derive(Debug, Clone, PartialEq)]
pub struct SheetReport {
    pub sheet: Sheet,
    pub rows: Vec<Row>,
}

/// The assembled report: sheets in report order, rows date-sorted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub sheets: Vec<SheetReport>,
}

impl Report {
    /// Rows of a sheet, when it has any
    pub fn sheet(&self, sheet: Sheet) -> Option<&SheetReport> {
        self.sheets.iter().find(|s| s.sheet == sheet)
    }

    /// Total row count across sheets
    pub fn total_rows(&self) -> usize {
        self.sheets.iter().map(|s| s.rows.len()).sum()
    }
}

/// Assemble the report for the registry's current state.
pub fn assemble(registry: &Registry, calc: &CalcOptions, options: &ReportOptions) -> Report {
    let sheets = registry
        .rebuild(calc)
        .into_iter()
        .map(|(sheet, products)| SheetReport {
            sheet,
            rows: products
                .iter()
                .enumerate()
                .map(|(i, product)| render_row(product, FIRST_DATA_ROW + i as u32, options))
                .collect(),
        })
        .collect();
    Report { sheets }
}

/// Render one computed product as a row at spreadsheet row `row`.
fn render_row(product: &ComputedProduct, row: u32, options: &ReportOptions) -> Row {
    let cells = Column::ALL
        .iter()
        .map(|&column| render_cell(product, column, row, options))
        .collect();
    Row { cells }
}

/// A numeric cell: suffixed literal in literal mode, bare number in formula
/// mode (so sibling references resolve to numbers).
fn numeric(value: f64, column: Column, options: &ReportOptions) -> CellContent {
    match options.mode {
        RenderMode::Literal => literal(value, column.format(), &options.local_currency),
        RenderMode::Formula => bare(value),
    }
}

fn optional_numeric(value: Option<f64>, column: Column, options: &ReportOptions) -> CellContent {
    match value {
        Some(value) => numeric(value, column, options),
        None => CellContent::Empty,
    }
}

/// A derived cell: in formula mode, use the expression when the engine's
/// branch is expressible over sibling cells, otherwise fall back to the
/// (numerically identical) bare value.
fn derived(
    value: f64,
    expr: Option<String>,
    column: Column,
    options: &ReportOptions,
) -> CellContent {
    match (options.mode, expr) {
        (RenderMode::Formula, Some(expr)) => CellContent::Formula(expr),
        _ => numeric(value, column, options),
    }
}

fn render_cell(
    product: &ComputedProduct,
    column: Column,
    row: u32,
    options: &ReportOptions,
) -> CellContent {
    let input = &product.input;
    let cell = |c: Column| c.cell_ref(row);
    let has_size_and_packs = input.size.is_some() && input.packs.map_or(false, |p| p >= 1);
    let has_packs = input.packs.map_or(false, |p| p >= 1);

    match column {
        // PRODUCT INFO
        Column::Date => date_cell(input.date),
        Column::Address => text_cell(input.address.as_deref()),
        Column::Category => text_cell(input.category.as_deref()),
        Column::SubCategory => text_cell(input.sub_category.as_deref()),
        Column::Brand => text_cell(input.brand.as_deref()),
        Column::Packaging => text_cell(input.packaging.as_deref()),
        Column::Size => optional_numeric(input.size, column, options),
        Column::Packs => optional_numeric(input.packs.map(f64::from), column, options),
        Column::WeightPerCarton => derived(
            product.weight_per_carton,
            has_size_and_packs.then(|| {
                round_weight_expr(&format!(
                    "({}*{}/1000)",
                    cell(Column::Size),
                    cell(Column::Packs)
                ))
            }),
            column,
            options,
        ),

        // WHOLESALE BUY-IN
        Column::BuyIn => numeric(input.buy_in, column, options),
        Column::SchemeBase => optional_numeric(input.scheme_base, column, options),
        Column::Foc => optional_numeric(input.foc, column, options),
        Column::DiscountPct => derived(
            product.discount_pct,
            product.derived_discount.then(|| {
                round2_expr(&format!(
                    "(100*{foc}/({scheme}+{foc}))",
                    foc = cell(Column::Foc),
                    scheme = cell(Column::SchemeBase)
                ))
            }),
            column,
            options,
        ),
        Column::DiscountValue => derived(
            product.discount_value,
            Some(round2_expr(&format!(
                "({}*{}/100)",
                cell(Column::BuyIn),
                cell(Column::DiscountPct)
            ))),
            column,
            options,
        ),
        Column::DirectDiscPct => numeric(product.direct_disc_pct, column, options),
        Column::DirectDiscValue => derived(
            product.direct_disc_value,
            Some(round2_expr(&format!(
                "({}*{}/100)",
                cell(Column::BuyIn),
                cell(Column::DirectDiscPct)
            ))),
            column,
            options,
        ),
        Column::NetBuyIn => derived(
            product.net_buy_in,
            Some(round2_expr(&format!(
                "({}-({}+{}))",
                cell(Column::BuyIn),
                cell(Column::DiscountValue),
                cell(Column::DirectDiscValue)
            ))),
            column,
            options,
        ),
        Column::PricePer100 => match product.price_per_100 {
            Some(value) => derived(
                value,
                has_size_and_packs.then(|| {
                    round2_expr(&format!(
                        "({net}/(({size}*{packs})/100))",
                        net = cell(Column::NetBuyIn),
                        size = cell(Column::Size),
                        packs = cell(Column::Packs)
                    ))
                }),
                column,
                options,
            ),
            None => CellContent::Empty,
        },

        // WHOLESALE SELL-OUT
        Column::MarkUp => optional_numeric(input.mark_up, column, options),
        Column::SellOutUsd => derived(
            product.sell_out_usd,
            // an explicit sell-out stays a plain value; an empty mark-up
            // cell reads as zero, matching the engine's default
            (!product.explicit_sell_out).then(|| {
                round2_expr(&format!(
                    "({}+{})",
                    cell(Column::NetBuyIn),
                    cell(Column::MarkUp)
                ))
            }),
            column,
            options,
        ),
        Column::ExchangeRate => numeric(product.exchange_rate, column, options),
        Column::SellOutLocal => derived(
            product.sell_out_local,
            Some(round2_expr(&format!(
                "({}*{})",
                cell(Column::SellOutUsd),
                cell(Column::ExchangeRate)
            ))),
            column,
            options,
        ),

        // RETAIL
        Column::UnitPriceLocal => numeric(input.unit_price_local, column, options),
        Column::MarginPerUnit => derived(
            product.margin_per_unit,
            has_packs.then(|| {
                round2_expr(&format!(
                    "({}-{}/{})",
                    cell(Column::UnitPriceLocal),
                    cell(Column::SellOutLocal),
                    cell(Column::Packs)
                ))
            }),
            column,
            options,
        ),
        Column::PricePerCarton => derived(
            product.price_per_carton,
            has_packs.then(|| {
                round2_expr(&format!(
                    "({}*{})",
                    cell(Column::UnitPriceLocal),
                    cell(Column::Packs)
                ))
            }),
            column,
            options,
        ),
        Column::MarginPerCarton => derived(
            product.margin_per_carton,
            Some(round2_expr(&format!(
                "({}-{})",
                cell(Column::PricePerCarton),
                cell(Column::SellOutLocal)
            ))),
            column,
            options,
        ),
    }
}
