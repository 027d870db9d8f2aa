//! Page automation capability interface.
//!
//! The pipeline stages never talk to a browser directly. They depend on the
//! [`PageSession`] trait: a small capability surface (navigate, bounded
//! wait-for-visibility, click, type, select-by-value, read text/attributes,
//! count matches) that any automation technology can implement.
//!
//! # Implementations
//!
//! - [`chrome::ChromeSession`]: drives a headless Chrome process. Dropping
//!   the session tears the browser down, so release is guaranteed on every
//!   exit path.
//! - [`fake::FakeSession`] (test-only): a scripted in-memory page used to
//!   exercise the stages without a browser.
//!
//! All element addressing is by CSS selector string; per-item reads use
//! `:nth-child` addressing so the interface never has to hand out element
//! handles with lifetimes tied to the page.

use std::time::Duration;

use thiserror::Error;

pub mod chrome;

#[cfg(test)]
pub mod fake;

/// A failure surfaced by a page automation adapter.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The selector matched nothing within the bounded wait.
    #[error("timed out waiting for `{0}`")]
    Timeout(String),
    /// The selector matched nothing at interaction time.
    #[error("no element matches `{0}`")]
    NotFound(String),
    /// The underlying automation technology failed.
    #[error("browser error: {0}")]
    Browser(String),
}

/// Capability interface for driving a rendered page.
///
/// Every method is synchronous and strictly sequential; implementations are
/// expected to be used from a single logical thread of work.
pub trait PageSession {
    /// Load `url` and wait for the navigation to complete.
    fn navigate(&self, url: &str) -> Result<(), SessionError>;

    /// Poll until an element matching `selector` is present and visible, or
    /// `timeout` elapses.
    fn wait_visible(&self, selector: &str, timeout: Duration) -> Result<(), SessionError>;

    /// Click the first element matching `selector`.
    fn click(&self, selector: &str) -> Result<(), SessionError>;

    /// Type `text` into the first element matching `selector`.
    fn type_text(&self, selector: &str, text: &str) -> Result<(), SessionError>;

    /// Press the Enter key on the focused element.
    fn press_enter(&self) -> Result<(), SessionError>;

    /// Set a `<select>` element's value by option value (not visible label)
    /// and fire its change event.
    fn select_by_value(&self, selector: &str, value: &str) -> Result<(), SessionError>;

    /// Read the rendered inner text of the first element matching `selector`.
    fn inner_text(&self, selector: &str) -> Result<String, SessionError>;

    /// Read an attribute of the first element matching `selector`.
    /// `Ok(None)` means the element exists but lacks the attribute.
    fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>, SessionError>;

    /// Count the elements currently matching `selector`.
    fn count(&self, selector: &str) -> Result<usize, SessionError>;
}
