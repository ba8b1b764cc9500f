//! Parsing of individual configuration fragments.

use camino::Utf8PathBuf;
use serde_json::{Map, Value};

use crate::scan::ConfigDir;
use crate::{ConfError, ConfResult};

/// Reserved key holding per-case configuration.
pub const CASES_KEY: &str = "cases";

/// Reserved key holding environment overlays.
pub const ENV_KEY: &str = "env";

/// One source file's parsed contents, consumed immediately by the merge.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    path: Utf8PathBuf,
    values: Map<String, Value>,
}

impl Fragment {
    /// Reads and parses `name` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::File`] when the file cannot be read, is not valid
    /// JSON, or its top level is not an object.
    pub fn load(dir: &ConfigDir, name: &str) -> ConfResult<Self> {
        let path = dir.path().join(name);
        let data = dir.read_to_string(name)?;
        let value: Value = serde_json::from_str(&data).map_err(|err| ConfError::file(&path, err))?;
        match value {
            Value::Object(values) => Ok(Self { path, values }),
            other => Err(ConfError::invalid_data(
                &path,
                format!("expected a JSON object at the top level, found {}", kind(&other)),
            )),
        }
    }

    /// Path the fragment was read from.
    #[must_use]
    pub const fn path(&self) -> &Utf8PathBuf {
        &self.path
    }

    /// Splits the fragment into its suite-level settings and its `cases`
    /// entry, if any.
    #[must_use]
    pub fn split_cases(mut self) -> (Map<String, Value>, Option<Value>) {
        let cases = self.values.remove(CASES_KEY);
        (self.values, cases)
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
