//! The field table and block normalization
//!
//! One declarative table maps each canonical field to its accepted label
//! synonyms; adding a synonym or field is a data change here, not a code
//! change. [`parse_block`] runs extraction plus coercion for every field
//! and enforces the two required ones.

use crate::error::{ParseError, ParseResult};
use crate::extract::LabelPattern;
use crate::normalize::{parse_count, parse_date, parse_number};
use once_cell::sync::Lazy;
use pricebook_core::ProductInput;

/// Compiled label matchers, one per canonical field.
struct FieldTable {
    date: LabelPattern,
    address: LabelPattern,
    category: LabelPattern,
    sub_category: LabelPattern,
    brand: LabelPattern,
    packaging: LabelPattern,
    size: LabelPattern,
    packs: LabelPattern,
    buy_in: LabelPattern,
    scheme_base: LabelPattern,
    foc: LabelPattern,
    discount_pct: LabelPattern,
    direct_disc_pct: LabelPattern,
    mark_up: LabelPattern,
    sell_out_usd: LabelPattern,
    unit_price: LabelPattern,
    exchange_rate: LabelPattern,
}

static FIELDS: Lazy<FieldTable> = Lazy::new(|| FieldTable {
    date: LabelPattern::new(&["Date"]),
    // "Addresss" is a recurring typo in real input
    address: LabelPattern::new(&["Address", "Addresss"]),
    category: LabelPattern::new(&["Category"]),
    sub_category: LabelPattern::new(&["Sub-Category"]),
    brand: LabelPattern::new(&["Brand"]),
    packaging: LabelPattern::new(&["Packaging"]),
    size: LabelPattern::new(&["Size"]),
    packs: LabelPattern::new(&["Packs"]),
    buy_in: LabelPattern::new(&["Buy-in"]),
    scheme_base: LabelPattern::new(&["Scheme(base)", "Scheme"]),
    foc: LabelPattern::new(&["FOC"]),
    discount_pct: LabelPattern::new(&["Discount(%)"]),
    direct_disc_pct: LabelPattern::new(&["Direct Disc.(%)", "Direct Disc(%)"]),
    mark_up: LabelPattern::new(&["Mark - up", "Mark-up", "Mark up"]),
    sell_out_usd: LabelPattern::new(&["Sell Out ($)"]),
    unit_price: LabelPattern::new(&["Price Unit"]),
    exchange_rate: LabelPattern::new(&["Exchange Rate"]),
});

/// Normalize one product block into a [`ProductInput`].
///
/// Every optional field that is absent or fails coercion becomes `None`;
/// a missing or uncoercible buy-in or unit price fails the block.
pub fn parse_block(text: &str) -> ParseResult<ProductInput> {
    let fields = &*FIELDS;

    let buy_in = fields
        .buy_in
        .extract(text)
        .and_then(parse_number)
        .ok_or(ParseError::MissingField { field: "Buy-in" })?;
    let unit_price_local = fields
        .unit_price
        .extract(text)
        .and_then(parse_number)
        .ok_or(ParseError::MissingField { field: "Price Unit" })?;

    Ok(ProductInput {
        date: fields.date.extract(text).and_then(parse_date),
        address: fields.address.extract(text).map(str::to_string),
        category: fields.category.extract(text).map(str::to_string),
        sub_category: fields.sub_category.extract(text).map(str::to_string),
        brand: fields.brand.extract(text).map(str::to_string),
        packaging: fields.packaging.extract(text).map(str::to_string),
        size: fields.size.extract(text).and_then(parse_number),
        packs: fields.packs.extract(text).and_then(parse_count),
        buy_in,
        scheme_base: fields.scheme_base.extract(text).and_then(parse_number),
        foc: fields.foc.extract(text).and_then(parse_number),
        discount_pct: fields.discount_pct.extract(text).and_then(parse_number),
        direct_disc_pct: fields.direct_disc_pct.extract(text).and_then(parse_number),
        mark_up: fields.mark_up.extract(text).and_then(parse_number),
        sell_out_usd: fields.sell_out_usd.extract(text).and_then(parse_number),
        unit_price_local,
        exchange_rate: fields.exchange_rate.extract(text).and_then(parse_number),
    })
}
