//! Environment overlays applied after the base merge.

use serde_json::Value;
use tracing::{debug, warn};

use crate::environment::Environment;
use crate::fragment::CASES_KEY;
use crate::merge::merge_into_map;
use crate::suite::{CaseConfig, SuiteConfig};

/// Overlay flag that lets an environment's `cases` reach the suite's map.
pub const MERGE_CASE_DATA_KEY: &str = "is_merge_case_data";

/// Applies `overlays[environment]` to `suite` and `case`.
///
/// The overlay is cloned before use so the source data is never aliased.
/// Unless its `is_merge_case_data` flag is truthy, its `cases` map is kept out
/// of the suite's `cases`. Its entry for `case_name`, if any, is always merged
/// into `case`. Overlay values win on conflict. The flag itself is not copied
/// into the suite.
///
/// Returns `true` when an overlay for the environment existed.
pub fn apply_overlay(
    suite: &mut SuiteConfig,
    case: &mut CaseConfig,
    overlays: Option<&Value>,
    environment: &Environment,
    case_name: &str,
) -> bool {
    let Some(overlay) = overlays.and_then(|envs| envs.get(environment.as_str())) else {
        debug!(environment = %environment, "no overlay defined for environment");
        return false;
    };
    let Value::Object(mut fragment) = overlay.clone() else {
        warn!(environment = %environment, "ignoring environment overlay that is not an object");
        return false;
    };

    let merge_case_data = fragment
        .remove(MERGE_CASE_DATA_KEY)
        .is_some_and(|flag| is_truthy(&flag));
    let env_cases = fragment.remove(CASES_KEY);
    if merge_case_data && let Some(cases) = env_cases.clone() {
        fragment.insert(CASES_KEY.to_owned(), cases);
    }
    merge_into_map(suite.as_map_mut(), fragment);

    match env_cases.as_ref().and_then(|cases| cases.get(case_name)) {
        Some(Value::Object(entry)) => merge_into_map(case.as_map_mut(), entry.clone()),
        Some(Value::Null) | None => {}
        Some(_) => {
            warn!(environment = %environment, case = case_name, "ignoring non-object case overlay");
        }
    }
    true
}

/// Truthiness of an overlay flag; booleans are expected but numbers and
/// strings are accepted the way hand-written JSON tends to use them.
fn is_truthy(flag: &Value) -> bool {
    match flag {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(number) => number.as_i64().map_or_else(
            || number.as_f64().is_some_and(|n| n.is_normal() || n.is_subnormal()),
            |n| n != 0,
        ),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
