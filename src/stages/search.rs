//! Search submission.

use tracing::{info, instrument};

use crate::error::StageError;
use crate::selectors;
use crate::session::{PageSession, SessionError};

use super::WAIT_TIMEOUT;

/// Reveal the search input, submit the phrase, and wait for results.
///
/// Every failure here is recoverable: the caller logs it and the pipeline
/// carries on over whatever the page currently shows.
#[instrument(level = "info", skip(session))]
pub fn run(session: &dyn PageSession, phrase: &str) -> Result<(), StageError> {
    let soft = |e: SessionError| StageError::Recoverable(format!("search: {e}"));

    session
        .wait_visible(selectors::SEARCH_BUTTON, WAIT_TIMEOUT)
        .map_err(soft)?;
    session.click(selectors::SEARCH_BUTTON).map_err(soft)?;
    session
        .wait_visible(selectors::SEARCH_INPUT, WAIT_TIMEOUT)
        .map_err(soft)?;
    session
        .type_text(selectors::SEARCH_INPUT, phrase)
        .map_err(soft)?;
    session.press_enter().map_err(soft)?;
    session
        .wait_visible(selectors::SEARCH_RESULTS, WAIT_TIMEOUT)
        .map_err(soft)?;

    info!(%phrase, "Submitted search");
    Ok(())
}
