//! Errors raised by page objects.

use std::sync::Arc;

use suite_config::ConfError;
use thiserror::Error;

use crate::driver::DriverError;

/// Errors raised by page objects.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PageError {
    /// The browser driver failed.
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// An element exists but carries no text.
    #[error("element {selector} has no text content")]
    MissingText {
        /// Selector of the element.
        selector: String,
    },

    /// A suite setting the page needs is absent or not a string.
    #[error("suite setting '{key}' is missing or not a string")]
    MissingSetting {
        /// Suite key.
        key: String,
    },

    /// Reading configuration failed.
    #[error(transparent)]
    Config(#[from] Arc<ConfError>),
}

/// Result alias for page operations.
pub type PageResult<T> = Result<T, PageError>;
