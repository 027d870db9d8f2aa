//! Publication date range calculation.
//!
//! Pure mapping from a "months" width to a `[start, end]` pair of display
//! dates. Taking "now" as a parameter keeps the function deterministic and
//! independently testable.

use chrono::{Datelike, Duration, NaiveDateTime};

/// Compute the `[start, end]` date range covered by a search.
///
/// - `months` of 0 or 1 both mean "the current month": the range starts on
///   the first day of `now`'s month.
/// - `months` greater than 1 starts the range `30 * (months - 1)` days
///   before `now`.
///
/// Both endpoints are formatted `MM/DD/YYYY`, the shape the site's date
/// range inputs expect.
///
/// # Arguments
///
/// * `months` - Width of the range in months
/// * `now` - The instant treated as "today"
///
/// # Returns
///
/// A `(start, end)` pair of formatted dates.
pub fn date_range(months: u32, now: NaiveDateTime) -> (String, String) {
    let start = if months <= 1 {
        // First day of the current month always exists.
        now.with_day(1).unwrap()
    } else {
        now - Duration::days(30 * (i64::from(months) - 1))
    };

    (
        start.format("%m/%d/%Y").to_string(),
        now.format("%m/%d/%Y").to_string(),
    )
}
