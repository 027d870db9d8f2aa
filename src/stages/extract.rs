//! Per-item field extraction from the result listing.

use tracing::{info, instrument, warn};

use crate::error::StageError;
use crate::models::NewsRecord;
use crate::selectors;
use crate::session::{PageSession, SessionError};

use super::{settle, SETTLE, WAIT_TIMEOUT};

/// Read every result item into a [`NewsRecord`], in display order.
///
/// One unreadable item never aborts the batch: it is logged and skipped,
/// and extraction moves on to the next item. Only the results container
/// never appearing fails the stage (recoverably).
#[instrument(level = "info", skip(session))]
pub fn run(session: &dyn PageSession) -> Result<Vec<NewsRecord>, StageError> {
    session
        .wait_visible(selectors::SEARCH_RESULTS, WAIT_TIMEOUT)
        .map_err(|e| StageError::Recoverable(format!("extraction: {e}")))?;
    // Late-rendering items: give the listing a moment to finish painting.
    settle(SETTLE);

    let items = session
        .count(selectors::RESULT_ITEMS)
        .map_err(|e| StageError::Recoverable(format!("extraction: {e}")))?;

    let mut records = Vec::new();
    for index in 1..=items {
        match read_item(session, index) {
            Ok(record) => records.push(record),
            Err(e) => warn!(item = index, error = %e, "Skipping unreadable result item"),
        }
    }

    info!(items, extracted = records.len(), "Extraction complete");
    Ok(records)
}

/// Read the four mandatory fields of one result item.
///
/// Fails on the first missing field so the caller discards the item whole;
/// partially-read records are never kept.
fn read_item(session: &dyn PageSession, index: usize) -> Result<NewsRecord, SessionError> {
    let item = selectors::result_item(index);

    let date = session.inner_text(&format!("{item} {}", selectors::ITEM_DATE))?;
    let title = session.inner_text(&format!("{item} {}", selectors::ITEM_TITLE))?;
    let description = session.inner_text(&format!("{item} {}", selectors::ITEM_DESCRIPTION))?;
    let image = format!("{item} {}", selectors::ITEM_IMAGE);
    let picture_url = session
        .attribute(&image, "src")?
        .ok_or_else(|| SessionError::NotFound(format!("{image}[src]")))?;

    Ok(NewsRecord::new(title, date, description, picture_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::fake::FakeSession;

    fn well_formed_item(session: FakeSession, index: usize, title: &str) -> FakeSession {
        let item = selectors::result_item(index);
        session
            .with_text(&format!("{item} {}", selectors::ITEM_DATE), "3/1/24")
            .with_text(&format!("{item} h4"), title)
            .with_text(&format!("{item} p"), "Summary text")
            .with_attribute(&format!("{item} img"), "src", "https://example.com/pic.jpg")
    }

    #[test]
    fn test_broken_item_is_skipped_not_fatal() {
        // Item 1 has a date but its title read fails; item 2 is complete.
        let item_1 = selectors::result_item(1);
        let session = FakeSession::new()
            .with_visible(selectors::SEARCH_RESULTS)
            .with_count(selectors::RESULT_ITEMS, 2)
            .with_text(&format!("{item_1} {}", selectors::ITEM_DATE), "3/1/24");
        let session = well_formed_item(session, 2, "Surviving headline");

        let records = run(&session).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Surviving headline");
    }

    #[test]
    fn test_display_order_is_preserved() {
        let session = FakeSession::new()
            .with_visible(selectors::SEARCH_RESULTS)
            .with_count(selectors::RESULT_ITEMS, 3);
        let session = well_formed_item(session, 1, "First");
        let session = well_formed_item(session, 2, "Second");
        let session = well_formed_item(session, 3, "Third");

        let titles: Vec<String> = run(&session).unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_image_without_src_discards_the_item() {
        let item_1 = selectors::result_item(1);
        let session = FakeSession::new()
            .with_visible(selectors::SEARCH_RESULTS)
            .with_count(selectors::RESULT_ITEMS, 1)
            .with_text(&format!("{item_1} {}", selectors::ITEM_DATE), "3/1/24")
            .with_text(&format!("{item_1} h4"), "Headline")
            .with_text(&format!("{item_1} p"), "Summary")
            // img element exists but carries no src attribute
            .with_visible(&format!("{item_1} img"));

        assert!(run(&session).unwrap().is_empty());
    }

    #[test]
    fn test_missing_container_is_recoverable() {
        let session = FakeSession::new();
        let err = run(&session).unwrap_err();
        assert!(!err.is_fatal());
    }
}
