//! Extensions for mapping errors to `ConfResult` concisely.
//!
//! These helpers replace repetitive `.map_err(|e| Arc::new(ConfError::…(e)))`
//! chains when converting external error types into the crate's
//! `ConfResult<T>` alias (`Result<T, Arc<ConfError>>`).
//!
//! # Examples
//!
//! ```
//! use suite_config::{ConfResult, ConfResultExt};
//!
//! fn profile() -> ConfResult<String> {
//!     // figment::Error implements Into<ConfError>
//!     figment::Figment::new()
//!         .merge(("name", "local"))
//!         .extract_inner::<String>("name")
//!         .into_conf()
//! }
//! # assert_eq!(profile().ok().as_deref(), Some("local"));
//! ```

use std::sync::Arc;

use crate::{ConfError, ConfResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<ConfError>`
/// into a `ConfResult<T>`.
pub trait ConfResultExt<T, E> {
    /// Convert `Result<T, E>` into `ConfResult<T>` using `Into<ConfError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<ConfError>`.
    fn into_conf(self) -> ConfResult<T>;
}

impl<T, E> ConfResultExt<T, E> for Result<T, E>
where
    E: Into<ConfError>,
{
    fn into_conf(self) -> ConfResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

/// Extension for reading typed values out of untyped JSON payloads.
pub trait ValueResultExt<T> {
    /// Convert a `serde_json` failure into [`ConfError::Value`] for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::Value`] wrapped in `Arc` when the input is `Err`.
    fn for_key(self, key: &str) -> ConfResult<T>;
}

impl<T> ValueResultExt<T> for Result<T, serde_json::Error> {
    fn for_key(self, key: &str) -> ConfResult<T> {
        self.map_err(|source| {
            Arc::new(ConfError::Value {
                key: key.to_owned(),
                source,
            })
        })
    }
}
