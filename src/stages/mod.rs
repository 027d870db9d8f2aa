//! Pipeline stages for the scrape-sort-extract-enrich workflow.
//!
//! Stages run in a fixed order, each consuming the page state its
//! predecessor left behind:
//!
//! 1. [`navigate`]: load the site, dismiss the consent prompt
//! 2. [`search`]: submit the search phrase
//! 3. [`sort_filter`]: apply date range, date type, section, newest-first
//! 4. [`paginate`]: expand the listing a bounded number of times
//! 5. [`extract`]: read result items into [`NewsRecord`]s
//! 6. [`enrich`]: derive money mentions and phrase counts
//! 7. [`pictures`]: download each record's image
//! 8. [`export`]: write the tabular dataset
//!
//! [`collect`] drives the browser-facing stages (1-5). Only navigation can
//! end the run; every other stage failure is logged and the pipeline keeps
//! going with whatever it has, so a degraded run still produces an export.
//!
//! [`NewsRecord`]: crate::models::NewsRecord

use std::time::Duration;

use chrono::Local;
use tracing::warn;

use crate::cli::Cli;
use crate::dates;
use crate::error::StageError;
use crate::models::Collected;
use crate::session::PageSession;

pub mod enrich;
pub mod export;
pub mod extract;
pub mod navigate;
pub mod paginate;
pub mod pictures;
pub mod search;
pub mod sort_filter;

/// Bounded wait applied to every visibility poll.
pub(crate) const WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settle delay after interactions that trigger re-rendering.
#[cfg(not(test))]
pub(crate) const SETTLE: Duration = Duration::from_secs(2);
#[cfg(test)]
pub(crate) const SETTLE: Duration = Duration::from_millis(1);

/// Shorter settle used before clicking freshly appeared controls.
#[cfg(not(test))]
pub(crate) const SETTLE_SHORT: Duration = Duration::from_secs(1);
#[cfg(test)]
pub(crate) const SETTLE_SHORT: Duration = Duration::from_millis(1);

/// Block the pipeline thread for a fixed settle interval.
pub(crate) fn settle(duration: Duration) {
    std::thread::sleep(duration);
}

/// Drive the browser-facing stages and return the extracted records.
///
/// Navigation failure is fatal and propagates. Search, sort/filter, and
/// pagination failures are recoverable: they are logged, recorded in
/// [`Collected::degraded_stages`], and the pipeline continues. Extraction
/// failure degrades to an empty record set rather than aborting, so the
/// export stage still runs.
pub fn collect(session: &dyn PageSession, cfg: &Cli) -> Result<Collected, StageError> {
    let mut degraded_stages = Vec::new();

    navigate::run(session, &cfg.url)?;

    if let Err(e) = search::run(session, &cfg.search_phrase) {
        warn!(stage = "search", error = %e, "Stage failed; continuing");
        degraded_stages.push("search".to_string());
    }

    let (start_date, end_date) = dates::date_range(cfg.months, Local::now().naive_local());
    if let Err(e) = sort_filter::run(session, cfg, &start_date, &end_date) {
        warn!(stage = "sort_filter", error = %e, "Stage failed; continuing");
        degraded_stages.push("sort_filter".to_string());
    }

    if let Err(e) = paginate::run(session, cfg.show_more) {
        warn!(stage = "paginate", error = %e, "Stage failed; continuing");
        degraded_stages.push("paginate".to_string());
    }

    let records = match extract::run(session) {
        Ok(records) => records,
        Err(e) => {
            warn!(stage = "extract", error = %e, "Stage failed; continuing with no records");
            degraded_stages.push("extract".to_string());
            Vec::new()
        }
    };

    Ok(Collected {
        records,
        degraded_stages,
    })
}
