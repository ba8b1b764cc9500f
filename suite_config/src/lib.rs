//! Per-test-case JSON configuration for browser end-to-end suites.
//!
//! Each test file sits next to one or more JSON fragments. Resolving a test's
//! configuration merges those fragments into a [`SuiteConfig`], selects the
//! test's [`CaseConfig`] from the `cases` map, and applies the active
//! [`Environment`]'s overlay from the `env` map.
//!
//! ```no_run
//! use camino::Utf8Path;
//! use suite_config::{ConfigView, Environment, TestConfig};
//!
//! let conf = TestConfig::for_test(
//!     Utf8Path::new("tests/zero_config/sort_table.rs"),
//!     "Test case 1 @TC_01",
//!     Environment::new("dev").as_ref(),
//! )?;
//! let domain = conf.suite_conf().get_str("domain");
//! # let _ = domain;
//! # Ok::<_, std::sync::Arc<suite_config::ConfError>>(())
//! ```

mod environment;
mod error;
mod fixture;
mod fragment;
mod identity;
mod merge;
mod profile;
mod resolve;
mod result_ext;
mod scan;
mod source;
mod suite;

pub use environment::{ENV_VAR, Environment};
pub use error::{AggregatedErrors, ConfError};
pub use fixture::TestConfig;
pub use fragment::{CASES_KEY, ENV_KEY, Fragment};
pub use identity::{case_id_from_title, extract_case_ids};
pub use merge::merge_value;
pub use profile::{OVERRIDE_PREFIX, RunnerSettings, RuntimeProfile, Viewport};
pub use resolve::{Config, MERGE_CASE_DATA_KEY, apply_overlay, merge_fragments, select_case};
pub use result_ext::{ConfResultExt, ValueResultExt};
pub use scan::ConfigDir;
pub use source::ConfigSource;
pub use suite::{CaseConfig, ConfigView, SuiteConfig};

/// Result alias used throughout the crate.
pub type ConfResult<T> = Result<T, std::sync::Arc<ConfError>>;
