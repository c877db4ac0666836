//! Batch splitting
//!
//! A batch message holds one or more product blocks separated by delimiter
//! lines (three or more consecutive hyphens, e.g. `--- product 1 ---`).
//! Segments without a `Date:` line are conversational noise and are
//! dropped silently.

use once_cell::sync::Lazy;
use regex::Regex;

static DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-{3,}").expect("delimiter pattern is valid"));

static DATE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mi)^\s*date\s*:").expect("date-line pattern is valid"));

/// Split batch text into candidate product blocks.
///
/// A segment qualifies only if some line begins with `Date:`
/// (case-insensitively); everything else is discarded.
pub fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if DELIMITER.is_match(line) {
            flush_segment(&mut blocks, &mut current);
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    flush_segment(&mut blocks, &mut current);
    blocks
}

fn flush_segment(blocks: &mut Vec<String>, current: &mut String) {
    if DATE_LINE.is_match(current) {
        blocks.push(std::mem::take(current));
    } else {
        if !current.trim().is_empty() {
            tracing::debug!("dropping segment without a Date: line");
        }
        current.clear();
    }
}
