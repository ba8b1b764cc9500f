//! Merging of every fragment in a configuration directory.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::fragment::{CASES_KEY, Fragment};
use crate::merge::{merge_into_map, merge_value};
use crate::scan::{ConfigDir, json_stem};
use crate::source::ConfigSource;
use crate::suite::SuiteConfig;
use crate::{ConfError, ConfResult};

/// Merges the fragments described by `source` into one [`SuiteConfig`].
///
/// When `<stem>.json` exists for the preferred stem only that file is read;
/// otherwise every `.json` file is merged in name order, later files winning.
/// `cases` entries are merged separately so cases from different files
/// accumulate and a case defined twice is deep-merged.
///
/// # Errors
///
/// Returns [`ConfError::DirectoryNotFound`] when the directory cannot be read
/// and [`ConfError::File`] (or [`ConfError::Aggregate`] for several files)
/// when fragments are malformed.
pub fn merge_fragments(source: &ConfigSource) -> ConfResult<SuiteConfig> {
    let dir = ConfigDir::open(source.directory())?;
    let files = dir.json_files()?;
    let selected = select_files(&files, source.preferred_stem());

    let mut settings = Map::new();
    let mut cases: Option<Value> = None;
    let mut errors = Vec::new();
    for name in selected {
        match Fragment::load(&dir, name) {
            Ok(fragment) => {
                debug!(path = %fragment.path(), "merging configuration fragment");
                let (fragment_settings, fragment_cases) = fragment.split_cases();
                merge_into_map(&mut settings, fragment_settings);
                if let Some(layer) = fragment_cases {
                    merge_value(cases.get_or_insert(Value::Null), layer);
                }
            }
            Err(err) => errors.push(err),
        }
    }
    if let Some(err) = ConfError::try_aggregate(errors) {
        return Err(Arc::new(err));
    }

    if let Some(merged_cases) = cases {
        settings.insert(CASES_KEY.to_owned(), merged_cases);
    }
    Ok(SuiteConfig::from_map(settings))
}

fn select_files<'a>(files: &'a [String], stem: Option<&str>) -> Vec<&'a str> {
    let preferred = stem.and_then(|wanted| {
        files
            .iter()
            .find(|name| json_stem(name) == Some(wanted))
    });
    match preferred {
        Some(name) => vec![name.as_str()],
        None => files.iter().map(String::as_str).collect(),
    }
}
