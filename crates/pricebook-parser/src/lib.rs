//! # pricebook-parser
//!
//! Turns raw batch text into normalized [`ProductInput`] records.
//!
//! A batch message contains one or more product blocks separated by
//! delimiter lines of three or more hyphens; a segment only counts as a
//! product if it has a `Date:` line, so conversational text mixed into a
//! batch is silently dropped. Within a block, each field is a `Label: value`
//! line; labels are matched from a declarative synonym table and values are
//! coerced leniently (currency symbols, comments, and thousands noise are
//! stripped; only buy-in and unit price are fatal when missing).
//!
//! [`ProductInput`]: pricebook_core::ProductInput

mod batch;
mod error;
mod extract;
mod fields;
mod normalize;

pub use batch::split_blocks;
pub use error::{ParseError, ParseResult};
pub use extract::LabelPattern;
pub use fields::parse_block;
pub use normalize::{parse_count, parse_date, parse_number};
