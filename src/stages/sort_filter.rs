//! Date range, date type, section, and sort-order application.

use tracing::{debug, info, instrument};

use crate::cli::Cli;
use crate::error::StageError;
use crate::selectors;
use crate::session::{PageSession, SessionError};

use super::WAIT_TIMEOUT;

/// Sort-order option value for newest-first listing.
const SORT_NEWEST: &str = "newest";

/// Apply the configured filters and ordering to the result listing.
///
/// Filter options are picked by case-sensitive substring match against
/// their visible labels; the first match wins. A label matching nothing
/// leaves that filter unset on purpose: the site then searches unfiltered,
/// which is preferred over failing the run on a renamed menu entry. The
/// sort order is the one selection made by option value, not label.
#[instrument(level = "info", skip(session, cfg))]
pub fn run(
    session: &dyn PageSession,
    cfg: &Cli,
    start_date: &str,
    end_date: &str,
) -> Result<(), StageError> {
    let soft = |e: SessionError| StageError::Recoverable(format!("sort/filter: {e}"));

    select_option_containing(
        session,
        selectors::DATE_TYPE_BUTTON,
        selectors::DATE_TYPE_OPTION_LIST,
        &cfg.date_type,
    )
    .map_err(soft)?;

    session
        .wait_visible(selectors::START_DATE_INPUT, WAIT_TIMEOUT)
        .map_err(soft)?;
    session
        .type_text(selectors::START_DATE_INPUT, start_date)
        .map_err(soft)?;
    session
        .wait_visible(selectors::END_DATE_INPUT, WAIT_TIMEOUT)
        .map_err(soft)?;
    session
        .type_text(selectors::END_DATE_INPUT, end_date)
        .map_err(soft)?;

    session
        .select_by_value(selectors::SORT_SELECT, SORT_NEWEST)
        .map_err(soft)?;

    select_option_containing(
        session,
        selectors::SECTION_BUTTON,
        selectors::SECTION_OPTION_LIST,
        &cfg.section,
    )
    .map_err(soft)?;
    // Close the section dropdown so it does not cover the listing.
    session.click(selectors::SECTION_BUTTON).map_err(soft)?;

    info!(start_date, end_date, "Applied filters and newest-first ordering");
    Ok(())
}

/// Open a dropdown and click the first option whose label contains `needle`.
///
/// No matching label means no selection is made and `Ok` is returned.
fn select_option_containing(
    session: &dyn PageSession,
    button: &str,
    list: &str,
    needle: &str,
) -> Result<(), SessionError> {
    session.wait_visible(button, WAIT_TIMEOUT)?;
    session.click(button)?;
    session.wait_visible(list, WAIT_TIMEOUT)?;

    let options = session.count(&selectors::option_items(list))?;
    for index in 1..=options {
        let option = selectors::option_item(list, index);
        let label = session.inner_text(&option)?;
        if label.contains(needle) {
            session.click(&option)?;
            debug!(%label, %needle, "Selected dropdown option");
            return Ok(());
        }
    }

    debug!(%needle, options, "No option label matched; leaving filter unset");
    Ok(())
}
