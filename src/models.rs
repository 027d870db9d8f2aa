//! Data models for extracted news records.
//!
//! The central type is [`NewsRecord`]: one search result read off the page,
//! carrying its derived signals directly on the struct. Keeping the derived
//! fields (money flag, phrase counts, downloaded picture filename) on the
//! record itself means a failed picture download can never misalign one
//! record's filename against another record's row in the export.

use serde::Serialize;

/// One news article extracted from the search results listing.
///
/// A `NewsRecord` only exists if all four mandatory fields (title, date,
/// description, picture URL) were successfully read during extraction;
/// items with partial reads are discarded, never padded with empties.
///
/// # Field Lifecycle
///
/// - `title`, `date`, `description`, `picture_url`: set by the extraction
///   stage, immutable afterwards.
/// - `contains_money`, `counter_title`, `counter_description`: computed by
///   the enrichment stage for every surviving record before export.
/// - `picture_filename`: `Some` if and only if the image download for this
///   record succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct NewsRecord {
    /// Article headline as displayed in the results listing.
    pub title: String,
    /// Publication date exactly as displayed by the site (never reparsed).
    pub date: String,
    /// Result summary/description text.
    pub description: String,
    /// Remote image URL. Used by the download stage; excluded from export.
    pub picture_url: String,
    /// Local filename of the downloaded image, present only on success.
    pub picture_filename: Option<String>,
    /// Whether the title or description mentions a monetary amount.
    pub contains_money: bool,
    /// Non-overlapping occurrences of the search phrase in the title.
    pub counter_title: usize,
    /// Non-overlapping occurrences of the search phrase in the description.
    pub counter_description: usize,
}

impl NewsRecord {
    /// Build a freshly extracted record with unset derived fields.
    pub fn new(title: String, date: String, description: String, picture_url: String) -> Self {
        Self {
            title,
            date,
            description,
            picture_url,
            picture_filename: None,
            contains_money: false,
            counter_title: 0,
            counter_description: 0,
        }
    }
}

/// Result of the browser-facing half of the pipeline.
///
/// `records` preserves site display order. `degraded_stages` names every
/// stage that hit a recoverable failure, so callers can tell a clean run
/// with N records apart from a best-effort run that limped to the same N.
#[derive(Debug, Default)]
pub struct Collected {
    /// Extracted records in display order.
    pub records: Vec<NewsRecord>,
    /// Names of stages that failed recoverably during collection.
    pub degraded_stages: Vec<String>,
}
