//! Selection of a single case's configuration.

use serde_json::{Map, Value};

use crate::result_ext::ValueResultExt;
use crate::suite::{CaseConfig, SuiteConfig};
use crate::{ConfError, ConfResult};

/// Returns the configuration for `case_name` from the merged `cases` map.
///
/// A case absent from an existing `cases` map resolves to an empty
/// configuration: a case that needs no settings is valid.
///
/// # Errors
///
/// Returns [`ConfError::MissingCaseConfig`] when `case_name` is blank or the
/// suite has no `cases` map, and [`ConfError::Value`] when the case entry is
/// not an object.
pub fn select_case(suite: &SuiteConfig, case_name: &str) -> ConfResult<CaseConfig> {
    if case_name.trim().is_empty() {
        return Err(ConfError::missing_case(case_name));
    }
    let Some(Value::Object(cases)) = suite.cases() else {
        return Err(ConfError::missing_case(case_name));
    };
    match cases.get(case_name) {
        None | Some(Value::Null) => Ok(CaseConfig::default()),
        Some(Value::Object(entry)) => Ok(CaseConfig::from_map(entry.clone())),
        Some(other) => serde_json::from_value::<Map<String, Value>>(other.clone())
            .map(CaseConfig::from_map)
            .for_key(&format!("cases.{case_name}")),
    }
}
