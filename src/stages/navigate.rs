//! Landing-page navigation and consent dismissal.

use tracing::{debug, instrument, warn};

use crate::error::StageError;
use crate::selectors;
use crate::session::PageSession;

use super::{settle, SETTLE_SHORT, WAIT_TIMEOUT};

/// Load the target site and dismiss the consent prompt if one appears.
///
/// A missing consent prompt is the normal case for repeat visitors and is
/// not an error. Failing to load the URL at all is fatal: nothing
/// downstream can work without a page.
#[instrument(level = "info", skip(session))]
pub fn run(session: &dyn PageSession, url: &str) -> Result<(), StageError> {
    session
        .navigate(url)
        .map_err(|e| StageError::Fatal(format!("navigation: {e}")))?;

    match session.wait_visible(selectors::CONSENT_ACCEPT, WAIT_TIMEOUT) {
        Ok(()) => {
            settle(SETTLE_SHORT);
            if let Err(e) = session.click(selectors::CONSENT_ACCEPT) {
                warn!(error = %e, "Consent prompt appeared but could not be dismissed");
            }
        }
        Err(_) => debug!("No consent prompt; continuing"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::fake::FakeSession;

    #[test]
    fn test_consent_prompt_is_clicked_when_present() {
        let session = FakeSession::new().with_visible(selectors::CONSENT_ACCEPT);
        run(&session, "https://news.example.com").unwrap();
        assert_eq!(session.clicks(), vec![selectors::CONSENT_ACCEPT.to_string()]);
    }

    #[test]
    fn test_missing_consent_prompt_is_not_an_error() {
        let session = FakeSession::new();
        run(&session, "https://news.example.com").unwrap();
        assert!(session.clicks().is_empty());
    }

    #[test]
    fn test_unreachable_url_is_fatal() {
        let session = FakeSession::new().with_failing_navigation();
        let err = run(&session, "https://news.example.com").unwrap_err();
        assert!(err.is_fatal());
    }
}
