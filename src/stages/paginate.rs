//! Bounded "show more" pagination.

use tracing::{info, instrument};

use crate::error::StageError;
use crate::selectors;
use crate::session::{PageSession, SessionError};

use super::{settle, SETTLE, WAIT_TIMEOUT};

/// Expand the result listing exactly `times` times.
///
/// The control disappearing mid-way (listing exhausted, or a re-render ate
/// the button) aborts only the remaining iterations; everything loaded so
/// far still feeds extraction.
#[instrument(level = "info", skip(session))]
pub fn run(session: &dyn PageSession, times: u32) -> Result<(), StageError> {
    for done in 0..times {
        if let Err(e) = expand_once(session) {
            return Err(StageError::Recoverable(format!(
                "show more stopped after {done} of {times} expansions: {e}"
            )));
        }
        settle(SETTLE);
    }

    info!(times, "Expanded result listing");
    Ok(())
}

fn expand_once(session: &dyn PageSession) -> Result<(), SessionError> {
    session.wait_visible(selectors::SHOW_MORE_BUTTON, WAIT_TIMEOUT)?;
    session.click(selectors::SHOW_MORE_BUTTON)
}
