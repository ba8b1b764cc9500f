//! Browser automation seam.
//!
//! Selectors are XPath expressions. Queries borrow the driver immutably;
//! anything that changes page state takes `&mut self`.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Page lifecycle milestones a driver can wait for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadState {
    /// The `load` event has fired.
    Load,
    /// The DOM has been parsed.
    DomContentLoaded,
    /// No network activity for a short window.
    NetworkIdle,
}

/// Element conditions accepted by [`BrowserDriver::wait_for`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ElementState {
    /// Present in the DOM.
    Attached,
    /// Present and rendered.
    Visible,
    /// Absent or not rendered.
    Hidden,
}

/// Options for [`BrowserDriver::click`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClickOptions {
    /// Time between mouse down and mouse up.
    pub delay: Option<Duration>,
    /// Selector of the iframe holding the target, if any.
    pub frame: Option<String>,
}

impl ClickOptions {
    /// Click with a mouse-down delay.
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            frame: None,
        }
    }

    /// Click an element inside `frame`.
    #[must_use]
    pub fn in_frame(frame: impl Into<String>) -> Self {
        Self {
            delay: None,
            frame: Some(frame.into()),
        }
    }
}

/// Failures reported by a [`BrowserDriver`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DriverError {
    /// Navigation to `url` failed.
    #[error("failed to navigate to {url}: {reason}")]
    Navigation {
        /// Target URL.
        url: String,
        /// Backend message.
        reason: String,
    },
    /// No element matched `selector`.
    #[error("no element matches {selector}")]
    NotFound {
        /// Selector that matched nothing.
        selector: String,
    },
    /// A wait did not complete in time.
    #[error("timed out after {timeout:?} waiting for {selector} to be {state:?}")]
    Timeout {
        /// Selector being waited on.
        selector: String,
        /// Condition that was not reached.
        state: ElementState,
        /// Time allowed.
        timeout: Duration,
    },
    /// Script evaluation failed.
    #[error("script evaluation failed: {0}")]
    Script(String),
    /// Any other backend failure.
    #[error("browser backend error: {0}")]
    Backend(String),
}

/// A browser page that page objects drive.
pub trait BrowserDriver {
    /// Navigates to an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Navigation`] when the page cannot be loaded.
    fn navigate(&mut self, url: &str) -> Result<(), DriverError>;

    /// Blocks until the page reaches `state`.
    ///
    /// # Errors
    ///
    /// Returns a driver error if the state is never reached.
    fn wait_for_load_state(&mut self, state: LoadState) -> Result<(), DriverError>;

    /// Clicks the first element matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::NotFound`] when nothing matches.
    fn click(&mut self, selector: &str, options: &ClickOptions) -> Result<(), DriverError>;

    /// Reads attribute `name` of the first match.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::NotFound`] when nothing matches.
    fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>, DriverError>;

    /// Raw `textContent` of the first match.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::NotFound`] when nothing matches.
    fn text_content(&self, selector: &str) -> Result<Option<String>, DriverError>;

    /// Rendered `innerText` of the first match.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::NotFound`] when nothing matches.
    fn inner_text(&self, selector: &str) -> Result<String, DriverError>;

    /// `textContent` of every match, in document order.
    ///
    /// # Errors
    ///
    /// Returns a driver error if the query fails.
    fn all_text_contents(&self, selector: &str) -> Result<Vec<String>, DriverError>;

    /// Number of elements matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns a driver error if the query fails.
    fn count(&self, selector: &str) -> Result<usize, DriverError>;

    /// Whether the first match is rendered. A missing element is not visible.
    ///
    /// # Errors
    ///
    /// Returns a driver error if the query fails.
    fn is_visible(&self, selector: &str) -> Result<bool, DriverError>;

    /// Waits up to `timeout` for the first match to reach `state`.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Timeout`] when the condition is not met in time.
    fn wait_for(
        &mut self,
        selector: &str,
        state: ElementState,
        timeout: Duration,
    ) -> Result<(), DriverError>;

    /// Scrolls the first match into the viewport if needed.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::NotFound`] when nothing matches.
    fn scroll_into_view(&mut self, selector: &str) -> Result<(), DriverError>;

    /// Evaluates `script` in the page with `arg` bound as its argument.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Script`] when the script throws.
    fn evaluate(&mut self, script: &str, arg: &Value) -> Result<Value, DriverError>;

    /// Idles for `duration`.
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<D: BrowserDriver + ?Sized> BrowserDriver for &mut D {
    fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        (**self).navigate(url)
    }

    fn wait_for_load_state(&mut self, state: LoadState) -> Result<(), DriverError> {
        (**self).wait_for_load_state(state)
    }

    fn click(&mut self, selector: &str, options: &ClickOptions) -> Result<(), DriverError> {
        (**self).click(selector, options)
    }

    fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>, DriverError> {
        (**self).attribute(selector, name)
    }

    fn text_content(&self, selector: &str) -> Result<Option<String>, DriverError> {
        (**self).text_content(selector)
    }

    fn inner_text(&self, selector: &str) -> Result<String, DriverError> {
        (**self).inner_text(selector)
    }

    fn all_text_contents(&self, selector: &str) -> Result<Vec<String>, DriverError> {
        (**self).all_text_contents(selector)
    }

    fn count(&self, selector: &str) -> Result<usize, DriverError> {
        (**self).count(selector)
    }

    fn is_visible(&self, selector: &str) -> Result<bool, DriverError> {
        (**self).is_visible(selector)
    }

    fn wait_for(
        &mut self,
        selector: &str,
        state: ElementState,
        timeout: Duration,
    ) -> Result<(), DriverError> {
        (**self).wait_for(selector, state, timeout)
    }

    fn scroll_into_view(&mut self, selector: &str) -> Result<(), DriverError> {
        (**self).scroll_into_view(selector)
    }

    fn evaluate(&mut self, script: &str, arg: &Value) -> Result<Value, DriverError> {
        (**self).evaluate(script, arg)
    }

    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}
