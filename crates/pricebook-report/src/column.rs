//! The fixed report column set
//!
//! Twenty-six columns, A through Z, grouped into the four header sections
//! of the original workbook. The set is versioned as a whole: consumers
//! index rows by [`Column`], never by position arithmetic of their own.

use std::fmt;

/// Report sections (the colored header bands)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ProductInfo,
    WholesaleBuyIn,
    WholesaleSellOut,
    Retail,
}

/// Per-column display format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFormat {
    Date,
    Text,
    Integer,
    /// Plain number with no suffix
    Number,
    /// USD currency, "$" suffix
    CurrencyUsd,
    /// Local currency, configurable suffix
    CurrencyLocal,
    Percent,
    /// Unit-suffixed quantity ("ml", "L", ...)
    Unit(&'static str),
}

/// One column of the report, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    Address,
    Category,
    SubCategory,
    Brand,
    Packaging,
    Size,
    Packs,
    WeightPerCarton,
    BuyIn,
    SchemeBase,
    Foc,
    DiscountPct,
    DiscountValue,
    DirectDiscPct,
    DirectDiscValue,
    NetBuyIn,
    PricePer100,
    MarkUp,
    SellOutUsd,
    ExchangeRate,
    SellOutLocal,
    UnitPriceLocal,
    MarginPerUnit,
    PricePerCarton,
    MarginPerCarton,
}

impl Column {
    /// All columns in sheet order (A..Z)
    pub const ALL: [Column; 26] = [
        Column::Date,
        Column::Address,
        Column::Category,
        Column::SubCategory,
        Column::Brand,
        Column::Packaging,
        Column::Size,
        Column::Packs,
        Column::WeightPerCarton,
        Column::BuyIn,
        Column::SchemeBase,
        Column::Foc,
        Column::DiscountPct,
        Column::DiscountValue,
        Column::DirectDiscPct,
        Column::DirectDiscValue,
        Column::NetBuyIn,
        Column::PricePer100,
        Column::MarkUp,
        Column::SellOutUsd,
        Column::ExchangeRate,
        Column::SellOutLocal,
        Column::UnitPriceLocal,
        Column::MarginPerUnit,
        Column::PricePerCarton,
        Column::MarginPerCarton,
    ];

    /// Zero-based position in the column order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Spreadsheet column letter (A..Z)
    pub fn letter(&self) -> char {
        (b'A' + self.index() as u8) as char
    }

    /// Column header text
    pub fn header(&self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::Address => "Address",
            Column::Category => "Category",
            Column::SubCategory => "Sub-Category",
            Column::Brand => "Brand",
            Column::Packaging => "Packaging",
            Column::Size => "Size",
            Column::Packs => "Packs",
            Column::WeightPerCarton => "Weight per Ctn",
            Column::BuyIn => "Buy-in",
            Column::SchemeBase => "Scheme(base)",
            Column::Foc => "FOC",
            Column::DiscountPct => "Discount(%)",
            Column::DiscountValue => "Discount($)",
            Column::DirectDiscPct => "Direct Disc.(%)",
            Column::DirectDiscValue => "Direct Disc($)",
            Column::NetBuyIn => "Net Buy-in",
            Column::PricePer100 => "Price/100-units",
            Column::MarkUp => "Mark-up",
            Column::SellOutUsd => "Sell Out ($)",
            Column::ExchangeRate => "Exchange Rate",
            Column::SellOutLocal => "Sell Out (local)",
            Column::UnitPriceLocal => "Unit Price (local)",
            Column::MarginPerUnit => "Margin/Unit (local)",
            Column::PricePerCarton => "Price/Carton (local)",
            Column::MarginPerCarton => "Margin/Carton (local)",
        }
    }

    /// Display format of this column's cells
    pub fn format(&self) -> ColumnFormat {
        match self {
            Column::Date => ColumnFormat::Date,
            Column::Address
            | Column::Category
            | Column::SubCategory
            | Column::Brand
            | Column::Packaging => ColumnFormat::Text,
            Column::Size => ColumnFormat::Unit("ml"),
            Column::Packs => ColumnFormat::Integer,
            Column::WeightPerCarton => ColumnFormat::Unit("L"),
            Column::BuyIn
            | Column::DiscountValue
            | Column::DirectDiscValue
            | Column::NetBuyIn
            | Column::PricePer100
            | Column::MarkUp
            | Column::SellOutUsd => ColumnFormat::CurrencyUsd,
            Column::SchemeBase | Column::Foc | Column::ExchangeRate => ColumnFormat::Number,
            Column::DiscountPct | Column::DirectDiscPct => ColumnFormat::Percent,
            Column::SellOutLocal
            | Column::UnitPriceLocal
            | Column::MarginPerUnit
            | Column::PricePerCarton
            | Column::MarginPerCarton => ColumnFormat::CurrencyLocal,
        }
    }

    /// Section this column belongs to
    pub fn section(&self) -> Section {
        match self {
            Column::Date
            | Column::Address
            | Column::Category
            | Column::SubCategory
            | Column::Brand
            | Column::Packaging
            | Column::Size
            | Column::Packs
            | Column::WeightPerCarton => Section::ProductInfo,
            Column::BuyIn
            | Column::SchemeBase
            | Column::Foc
            | Column::DiscountPct
            | Column::DiscountValue
            | Column::DirectDiscPct
            | Column::DirectDiscValue
            | Column::NetBuyIn
            | Column::PricePer100 => Section::WholesaleBuyIn,
            Column::MarkUp
            | Column::SellOutUsd
            | Column::ExchangeRate
            | Column::SellOutLocal => Section::WholesaleSellOut,
            Column::UnitPriceLocal
            | Column::MarginPerUnit
            | Column::PricePerCarton
            | Column::MarginPerCarton => Section::Retail,
        }
    }

    /// Same-row cell reference, e.g. `J3`
    pub fn cell_ref(&self, row: u32) -> String {
        format!("{}{}", self.letter(), row)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}
