//! Label-line field extraction
//!
//! Pure string extraction: find the first line matching
//! `^\s*(label)\s*:\s*(.*)$` case-insensitively and return the trimmed
//! value. No content validation happens here.

use regex::{Regex, RegexBuilder};

/// A compiled matcher for one field's label synonyms.
pub struct LabelPattern {
    regex: Regex,
}

impl LabelPattern {
    /// Compile a matcher from label synonyms.
    ///
    /// Labels are escaped literally, so the synonym table stays plain data.
    pub fn new(labels: &[&str]) -> Self {
        let alternation = labels
            .iter()
            .map(|label| regex::escape(label))
            .collect::<Vec<_>>()
            .join("|");
        let regex = RegexBuilder::new(&format!(r"^\s*(?:{alternation})\s*:\s*(.*)$"))
            .case_insensitive(true)
            .build()
            .expect("escaped label alternation is a valid pattern");
        Self { regex }
    }

    /// Extract the value following the first matching label line.
    ///
    /// Only the first matching line is consulted: if its value trims to
    /// empty, the field is absent even when a later duplicate carries one.
    pub fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        for line in text.lines() {
            if let Some(caps) = self.regex.captures(line) {
                let value = caps.get(1).map_or("", |m| m.as_str()).trim();
                return if value.is_empty() { None } else { Some(value) };
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_trimmed_value() {
        let pattern = LabelPattern::new(&["Brand"]);
        assert_eq!(pattern.extract("Brand:  Health Pro  "), Some("Health Pro"));
    }

    #[test]
    fn test_case_insensitive_and_leading_whitespace() {
        let pattern = LabelPattern::new(&["Buy-in"]);
        assert_eq!(pattern.extract("  buy-IN : 22.50$"), Some("22.50$"));
    }

    #[test]
    fn test_first_matching_line_wins() {
        let pattern = LabelPattern::new(&["Packs"]);
        assert_eq!(pattern.extract("Packs: 12\nPacks: 48"), Some("12"));
    }

    #[test]
    fn test_empty_first_match_hides_later_duplicates() {
        let pattern = LabelPattern::new(&["Packs"]);
        assert_eq!(pattern.extract("Packs:\nPacks: 48"), None);
    }

    #[test]
    fn test_synonyms() {
        let pattern = LabelPattern::new(&["Address", "Addresss"]);
        assert_eq!(pattern.extract("Addresss: Market St"), Some("Market St"));
    }

    #[test]
    fn test_no_match() {
        let pattern = LabelPattern::new(&["FOC"]);
        assert_eq!(pattern.extract("Packs: 12"), None);
        // label must start the line up to whitespace
        assert_eq!(pattern.extract("total FOC: 3"), None);
    }
}
