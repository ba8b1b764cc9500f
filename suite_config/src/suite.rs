//! Read-only views over resolved suite and case configuration.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{ConfResult, fragment::CASES_KEY, result_ext::ValueResultExt};

/// Shared accessors for JSON-object configuration views.
pub trait ConfigView {
    /// Underlying JSON object.
    fn as_map(&self) -> &Map<String, Value>;

    /// Returns the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().get(key)
    }

    /// Returns the value under `key` when it is a string.
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Deserialises the value under `key` into `T`.
    ///
    /// A missing key is passed to `T` as `null`, so `Option<T>` targets read
    /// absent keys as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfError::Value`] when the value does not match `T`.
    fn get_as<T: DeserializeOwned>(&self, key: &str) -> ConfResult<T> {
        let value = self.get(key).cloned().unwrap_or(Value::Null);
        serde_json::from_value(value).for_key(key)
    }

    /// Returns `true` when no keys are present.
    fn is_empty(&self) -> bool {
        self.as_map().is_empty()
    }
}

/// Suite-wide configuration shared by every case in a test file.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SuiteConfig {
    values: Map<String, Value>,
}

impl SuiteConfig {
    /// Wraps an already merged JSON object.
    #[must_use]
    pub const fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// The merged `cases` entry, when present.
    #[must_use]
    pub fn cases(&self) -> Option<&Value> {
        self.values.get(CASES_KEY)
    }

    /// Consumes the view and returns it as a JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }

    pub(crate) const fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.values
    }
}

impl ConfigView for SuiteConfig {
    fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

/// Configuration scoped to one named test case.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CaseConfig {
    values: Map<String, Value>,
}

impl CaseConfig {
    /// Wraps a case's JSON object.
    #[must_use]
    pub const fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Consumes the view and returns it as a JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }

    pub(crate) const fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.values
    }
}

impl ConfigView for CaseConfig {
    fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}
