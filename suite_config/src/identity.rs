//! Extraction of case identifiers from test titles.
//!
//! A title such as `Test case 1 @TC_01` names the case `TC_01`. The marker is
//! an `@` followed by `TC_` and an identifier, separated from the rest of the
//! title by whitespace.

use std::sync::Arc;

use crate::{ConfError, ConfResult};

const MARKER_PREFIX: &str = "@TC_";

/// Returns every case identifier marked in `title`, in order of appearance.
///
/// # Examples
///
/// ```
/// use suite_config::extract_case_ids;
///
/// assert_eq!(extract_case_ids("Test case 1 @TC_01"), vec!["TC_01"]);
/// assert!(extract_case_ids("Test case without marker").is_empty());
/// ```
#[must_use]
pub fn extract_case_ids(title: &str) -> Vec<String> {
    title
        .split_whitespace()
        .filter(|token| token.starts_with(MARKER_PREFIX))
        .map(|token| token.replacen('@', "", 1))
        .collect()
}

/// Returns the single case identifier marked in `title`.
///
/// # Errors
///
/// Returns [`ConfError::InvalidTestIdentity`] when the title carries no
/// marker or more than one.
pub fn case_id_from_title(title: &str) -> ConfResult<String> {
    let ids = extract_case_ids(title);
    if let [id] = ids.as_slice() {
        return Ok(id.clone());
    }
    Err(Arc::new(ConfError::InvalidTestIdentity {
        title: title.to_owned(),
        found: ids.len(),
    }))
}
