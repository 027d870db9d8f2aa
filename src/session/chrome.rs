//! Headless Chrome adapter for [`PageSession`].
//!
//! Wraps a `headless_chrome` browser process and a single tab. The browser
//! is launched headless at 1280x700. Inside a container (detected via
//! `/.dockerenv` or `NEWS_SWEEP_CONTAINER`) the Chrome sandbox is disabled,
//! and `CHROME_PATH` overrides binary discovery.
//!
//! Dropping a [`ChromeSession`] kills the Chrome process, which is how the
//! pipeline guarantees teardown on every exit path.

use std::sync::Arc;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::{debug, info};

use super::{PageSession, SessionError};

/// A live headless Chrome browser with one open tab.
pub struct ChromeSession {
    // Held only to keep the Chrome process alive for the tab's lifetime.
    _browser: Browser,
    tab: Arc<Tab>,
}

impl ChromeSession {
    /// Launch a headless Chrome process and open a blank tab.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Browser`] if Chrome cannot be found or fails
    /// to start.
    pub fn launch() -> Result<Self, SessionError> {
        let is_container = std::env::var("NEWS_SWEEP_CONTAINER").is_ok()
            || std::path::Path::new("/.dockerenv").exists();
        let chrome_path = std::env::var("CHROME_PATH")
            .ok()
            .map(std::path::PathBuf::from);

        let mut builder = LaunchOptions::default_builder();
        builder.headless(true).window_size(Some((1280, 700)));
        if is_container {
            builder.sandbox(false);
        }
        if let Some(path) = chrome_path {
            builder.path(Some(path));
        }
        let options = builder
            .build()
            .map_err(|e| SessionError::Browser(format!("launch options: {e}")))?;

        let browser = Browser::new(options)
            .map_err(|e| SessionError::Browser(format!("failed to launch Chrome: {e}")))?;
        let tab = browser
            .new_tab()
            .map_err(|e| SessionError::Browser(format!("failed to open tab: {e}")))?;

        info!(container = is_container, "Launched headless Chrome session");
        Ok(Self {
            _browser: browser,
            tab,
        })
    }

    /// Run a JS expression against the page and return its JSON value.
    fn eval(&self, expression: &str) -> Result<Option<serde_json::Value>, SessionError> {
        let object = self
            .tab
            .evaluate(expression, false)
            .map_err(|e| SessionError::Browser(e.to_string()))?;
        Ok(object.value)
    }
}

impl PageSession for ChromeSession {
    fn navigate(&self, url: &str) -> Result<(), SessionError> {
        debug!(%url, "Navigating");
        self.tab
            .navigate_to(url)
            .map_err(|e| SessionError::Browser(format!("navigation to {url} failed: {e}")))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| SessionError::Browser(format!("page load of {url} failed: {e}")))?;
        Ok(())
    }

    fn wait_visible(&self, selector: &str, timeout: Duration) -> Result<(), SessionError> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map(|_| ())
            .map_err(|_| SessionError::Timeout(selector.to_string()))
    }

    fn click(&self, selector: &str) -> Result<(), SessionError> {
        let element = self
            .tab
            .find_element(selector)
            .map_err(|_| SessionError::NotFound(selector.to_string()))?;
        element
            .click()
            .map_err(|e| SessionError::Browser(format!("click on `{selector}` failed: {e}")))?;
        Ok(())
    }

    fn type_text(&self, selector: &str, text: &str) -> Result<(), SessionError> {
        let element = self
            .tab
            .find_element(selector)
            .map_err(|_| SessionError::NotFound(selector.to_string()))?;
        element
            .click()
            .map_err(|e| SessionError::Browser(format!("focus on `{selector}` failed: {e}")))?;
        element
            .type_into(text)
            .map_err(|e| SessionError::Browser(format!("typing into `{selector}` failed: {e}")))?;
        Ok(())
    }

    fn press_enter(&self) -> Result<(), SessionError> {
        self.tab
            .press_key("Enter")
            .map_err(|e| SessionError::Browser(format!("Enter keypress failed: {e}")))?;
        Ok(())
    }

    fn select_by_value(&self, selector: &str, value: &str) -> Result<(), SessionError> {
        // No native <select> support in the CDP element API; set the value
        // and fire the change event the way a user-driven selection would.
        let expression = format!(
            "(() => {{ const el = document.querySelector({sel}); if (!el) return false; \
             el.value = {val}; el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
             return true; }})()",
            sel = js_string(selector),
            val = js_string(value),
        );
        match self.eval(&expression)? {
            Some(serde_json::Value::Bool(true)) => Ok(()),
            _ => Err(SessionError::NotFound(selector.to_string())),
        }
    }

    fn inner_text(&self, selector: &str) -> Result<String, SessionError> {
        let element = self
            .tab
            .find_element(selector)
            .map_err(|_| SessionError::NotFound(selector.to_string()))?;
        element
            .get_inner_text()
            .map_err(|e| SessionError::Browser(format!("text read of `{selector}` failed: {e}")))
    }

    fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>, SessionError> {
        let expression = format!(
            "(() => {{ const el = document.querySelector({sel}); \
             return el ? el.getAttribute({attr}) : undefined; }})()",
            sel = js_string(selector),
            attr = js_string(name),
        );
        match self.eval(&expression)? {
            Some(serde_json::Value::String(s)) => Ok(Some(s)),
            Some(serde_json::Value::Null) => Ok(None),
            _ => Err(SessionError::NotFound(selector.to_string())),
        }
    }

    fn count(&self, selector: &str) -> Result<usize, SessionError> {
        let expression = format!(
            "document.querySelectorAll({sel}).length",
            sel = js_string(selector)
        );
        match self.eval(&expression)? {
            Some(serde_json::Value::Number(n)) => Ok(n.as_u64().unwrap_or(0) as usize),
            _ => Ok(0),
        }
    }
}

/// Quote a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string("plain"), "\"plain\"");
        assert_eq!(js_string("a\"b"), "\"a\\\"b\"");
    }
}
