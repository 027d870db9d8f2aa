//! Scripted in-memory [`PageSession`] for tests.
//!
//! A `FakeSession` serves canned texts, attributes, and match counts, and
//! records every click, keystroke, and selection so tests can assert on the
//! exact interaction sequence a stage performed. Selectors the fake has not
//! been told about behave like missing elements: waits time out and reads
//! fail with `NotFound`.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use super::{PageSession, SessionError};

/// In-memory page model, built up with the `with_*` methods.
#[derive(Default)]
pub struct FakeSession {
    visible: HashSet<String>,
    texts: HashMap<String, String>,
    attributes: HashMap<(String, String), String>,
    counts: HashMap<String, usize>,
    fail_navigation: bool,
    navigations: Mutex<Vec<String>>,
    clicks: Mutex<Vec<String>>,
    typed: Mutex<Vec<(String, String)>>,
    selections: Mutex<Vec<(String, String)>>,
    enter_presses: Mutex<usize>,
}

impl FakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a selector that exists and is visible.
    pub fn with_visible(mut self, selector: &str) -> Self {
        self.visible.insert(selector.to_string());
        self
    }

    /// Register a selector with rendered inner text (implies visibility).
    pub fn with_text(mut self, selector: &str, text: &str) -> Self {
        self.texts.insert(selector.to_string(), text.to_string());
        self
    }

    /// Register an attribute value for a selector (implies visibility).
    pub fn with_attribute(mut self, selector: &str, name: &str, value: &str) -> Self {
        self.visible.insert(selector.to_string());
        self.attributes
            .insert((selector.to_string(), name.to_string()), value.to_string());
        self
    }

    /// Register the number of elements matching a selector.
    pub fn with_count(mut self, selector: &str, count: usize) -> Self {
        self.counts.insert(selector.to_string(), count);
        self
    }

    /// Make every `navigate` call fail.
    pub fn with_failing_navigation(mut self) -> Self {
        self.fail_navigation = true;
        self
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }

    pub fn clicks(&self) -> Vec<String> {
        self.clicks.lock().unwrap().clone()
    }

    pub fn typed(&self) -> Vec<(String, String)> {
        self.typed.lock().unwrap().clone()
    }

    pub fn selections(&self) -> Vec<(String, String)> {
        self.selections.lock().unwrap().clone()
    }

    pub fn enter_presses(&self) -> usize {
        *self.enter_presses.lock().unwrap()
    }

    fn knows(&self, selector: &str) -> bool {
        self.visible.contains(selector)
            || self.texts.contains_key(selector)
            || self.attributes.keys().any(|(s, _)| s == selector)
    }
}

impl PageSession for FakeSession {
    fn navigate(&self, url: &str) -> Result<(), SessionError> {
        if self.fail_navigation {
            return Err(SessionError::Browser(format!("cannot reach {url}")));
        }
        self.navigations.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn wait_visible(&self, selector: &str, _timeout: Duration) -> Result<(), SessionError> {
        if self.knows(selector) {
            Ok(())
        } else {
            Err(SessionError::Timeout(selector.to_string()))
        }
    }

    fn click(&self, selector: &str) -> Result<(), SessionError> {
        if !self.knows(selector) {
            return Err(SessionError::NotFound(selector.to_string()));
        }
        self.clicks.lock().unwrap().push(selector.to_string());
        Ok(())
    }

    fn type_text(&self, selector: &str, text: &str) -> Result<(), SessionError> {
        if !self.knows(selector) {
            return Err(SessionError::NotFound(selector.to_string()));
        }
        self.typed
            .lock()
            .unwrap()
            .push((selector.to_string(), text.to_string()));
        Ok(())
    }

    fn press_enter(&self) -> Result<(), SessionError> {
        *self.enter_presses.lock().unwrap() += 1;
        Ok(())
    }

    fn select_by_value(&self, selector: &str, value: &str) -> Result<(), SessionError> {
        if !self.knows(selector) {
            return Err(SessionError::NotFound(selector.to_string()));
        }
        self.selections
            .lock()
            .unwrap()
            .push((selector.to_string(), value.to_string()));
        Ok(())
    }

    fn inner_text(&self, selector: &str) -> Result<String, SessionError> {
        self.texts
            .get(selector)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(selector.to_string()))
    }

    fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>, SessionError> {
        if let Some(value) = self
            .attributes
            .get(&(selector.to_string(), name.to_string()))
        {
            return Ok(Some(value.clone()));
        }
        if self.knows(selector) {
            Ok(None)
        } else {
            Err(SessionError::NotFound(selector.to_string()))
        }
    }

    fn count(&self, selector: &str) -> Result<usize, SessionError> {
        Ok(self.counts.get(selector).copied().unwrap_or(0))
    }
}
