//! JSON deep-merge mechanics shared by fragment and overlay resolution.

use serde_json::map::Entry;
use serde_json::{Map, Value};

/// Lays `layer` over `target`, as a later fragment does over an earlier one.
///
/// Two objects combine key by key, recursing wherever both sides hold a key.
/// That lets one fragment add a case under `cases` without restating the
/// others. Any other layer value takes the slot outright, so arrays are
/// replaced rather than appended and an explicit `null` clears a setting.
///
/// # Examples
///
/// ```rust
/// use suite_config::merge_value;
/// use serde_json::json;
///
/// let mut suite = json!({"cases": {"TC_01": {"page_number": 5}}});
/// merge_value(&mut suite, json!({"cases": {"TC_02": {"page_number": 2}}}));
/// assert_eq!(
///     suite,
///     json!({"cases": {"TC_01": {"page_number": 5}, "TC_02": {"page_number": 2}}})
/// );
///
/// let mut tags = json!({"tags": ["smoke", "table"]});
/// merge_value(&mut tags, json!({"tags": ["nightly"]}));
/// assert_eq!(tags, json!({"tags": ["nightly"]}));
/// ```
pub fn merge_value(target: &mut Value, layer: Value) {
    match (target, layer) {
        (Value::Object(base), Value::Object(entries)) => merge_into_map(base, entries),
        (slot, replacement) => *slot = replacement,
    }
}

/// Merges the top-level entries of `layer` into `target`.
pub(crate) fn merge_into_map(target: &mut Map<String, Value>, layer: Map<String, Value>) {
    for (key, value) in layer {
        match target.entry(key) {
            Entry::Occupied(mut existing) => merge_value(existing.get_mut(), value),
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}
