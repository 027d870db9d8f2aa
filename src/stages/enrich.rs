//! Derived signals: monetary mentions and search-phrase counts.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, instrument};

use crate::models::NewsRecord;

/// Monetary-amount patterns, applied in order to title and description.
///
/// Currency-symbol-prefixed numbers allow optional thousands and decimal
/// separators (`$5`, `$12.50`, `$1,200.00`); bare numbers count when
/// followed by "dollars" or "USD".
static MONEY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\$\d+(?:,\d{3})*(?:\.\d+)?").unwrap(),
        Regex::new(r"\d+ dollars|\d+ USD").unwrap(),
    ]
});

/// Compute the derived fields for every record, in place.
#[instrument(level = "info", skip(records))]
pub fn run(records: &mut [NewsRecord], phrase: &str) {
    for record in records.iter_mut() {
        record.contains_money =
            contains_money(&record.title) || contains_money(&record.description);
        record.counter_title = count_occurrences(&record.title, phrase);
        record.counter_description = count_occurrences(&record.description, phrase);
    }
    info!(count = records.len(), %phrase, "Enriched records");
}

/// Whether any monetary pattern matches `text`.
fn contains_money(text: &str) -> bool {
    MONEY_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}

/// Non-overlapping literal occurrences of `phrase` in `haystack`.
///
/// Case-sensitive substring semantics, not word-boundary: "cat" counts
/// inside "category".
fn count_occurrences(haystack: &str, phrase: &str) -> usize {
    if phrase.is_empty() {
        return 0;
    }
    haystack.matches(phrase).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_detection_positive_cases() {
        assert!(contains_money("$12.50 grant"));
        assert!(contains_money("$1,200.00 awarded"));
        assert!(contains_money("50 dollars fine"));
        assert!(contains_money("settlement of 300 USD"));
        assert!(contains_money("Budget hits $5 million"));
    }

    #[test]
    fn test_money_detection_negative_cases() {
        assert!(!contains_money("no amount mentioned"));
        assert!(!contains_money("dollars without a number"));
        assert!(!contains_money("the 5 of us"));
    }

    #[test]
    fn test_phrase_count_is_substring_not_word_boundary() {
        assert_eq!(count_occurrences("AI and AI policy", "AI"), 2);
        assert_eq!(count_occurrences("category", "cat"), 1);
        assert_eq!(count_occurrences("Case sensitive", "case"), 0);
        assert_eq!(count_occurrences("anything", ""), 0);
    }

    #[test]
    fn test_run_fills_every_record() {
        let mut records = vec![
            NewsRecord::new(
                "Budget hits $5 million".into(),
                "3/1/24".into(),
                "Budget season opens".into(),
                "https://example.com/a.jpg".into(),
            ),
            NewsRecord::new(
                "Local weather update".into(),
                "3/2/24".into(),
                "Rain expected".into(),
                "https://example.com/b.jpg".into(),
            ),
        ];

        run(&mut records, "Budget");

        assert!(records[0].contains_money);
        assert_eq!(records[0].counter_title, 1);
        assert_eq!(records[0].counter_description, 1);
        assert!(!records[1].contains_money);
        assert_eq!(records[1].counter_title, 0);
        assert_eq!(records[1].counter_description, 0);
    }
}
