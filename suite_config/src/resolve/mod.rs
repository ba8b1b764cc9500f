//! Resolution of a test's configuration from its fragment directory.
//!
//! Resolution runs in a fixed order: the fragments are merged into one
//! [`SuiteConfig`], the named case is selected from its `cases` map, and the
//! active environment's overlay is applied on top. The `env` block is a
//! resolution-time directive and never appears in the result.

mod merger;
mod overlay;
mod select;

pub use merger::merge_fragments;
pub use overlay::{MERGE_CASE_DATA_KEY, apply_overlay};
pub use select::select_case;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::{
    ConfResult,
    environment::Environment,
    fragment::ENV_KEY,
    source::ConfigSource,
    suite::{CaseConfig, SuiteConfig},
};

/// Fully resolved configuration for one test.
///
/// Built once per test and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    suite: SuiteConfig,
    case: CaseConfig,
    case_name: String,
    directory: Utf8PathBuf,
    file_stem: Option<String>,
    environment: Option<Environment>,
}

impl Config {
    /// Resolves the configuration for `case_name` from `source`.
    ///
    /// # Errors
    ///
    /// - [`crate::ConfError::DirectoryNotFound`] when the directory cannot be
    ///   read.
    /// - [`crate::ConfError::File`] or [`crate::ConfError::Aggregate`] when
    ///   fragments are malformed.
    /// - [`crate::ConfError::MissingCaseConfig`] when `case_name` is empty or
    ///   no `cases` map exists.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use suite_config::{Config, ConfigSource, Environment, ConfigView};
    ///
    /// let source = ConfigSource::for_test_file("tests/zero_config/sort_table.rs");
    /// let env = Environment::new("dev");
    /// let config = Config::resolve(&source, "TC_01", env.as_ref())?;
    /// let pages: u32 = config.case().get_as("page_number")?;
    /// # let _ = pages;
    /// # Ok::<_, std::sync::Arc<suite_config::ConfError>>(())
    /// ```
    pub fn resolve(
        source: &ConfigSource,
        case_name: &str,
        environment: Option<&Environment>,
    ) -> ConfResult<Self> {
        let mut suite = merge_fragments(source)?;
        let mut case = select_case(&suite, case_name)?;
        let overlays = suite.as_map_mut().remove(ENV_KEY);

        if let Some(env) = environment {
            let applied = apply_overlay(&mut suite, &mut case, overlays.as_ref(), env, case_name);
            debug!(environment = %env, applied, "environment overlay evaluated");
        }
        suite.as_map_mut().remove(ENV_KEY);

        Ok(Self {
            suite,
            case,
            case_name: case_name.to_owned(),
            directory: source.directory().to_path_buf(),
            file_stem: source.preferred_stem().map(str::to_owned),
            environment: environment.cloned(),
        })
    }

    /// Suite-wide configuration.
    #[must_use]
    pub const fn suite(&self) -> &SuiteConfig {
        &self.suite
    }

    /// Configuration for the selected case.
    #[must_use]
    pub const fn case(&self) -> &CaseConfig {
        &self.case
    }

    /// Name of the selected case.
    #[must_use]
    pub fn case_name(&self) -> &str {
        &self.case_name
    }

    /// Directory the fragments were read from.
    #[must_use]
    pub fn directory(&self) -> &Utf8Path {
        &self.directory
    }

    /// Preferred fragment stem, if one was requested.
    #[must_use]
    pub fn file_stem(&self) -> Option<&str> {
        self.file_stem.as_deref()
    }

    /// Environment whose overlay was requested.
    #[must_use]
    pub const fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    /// Splits the configuration into its suite and case views.
    #[must_use]
    pub fn into_parts(self) -> (SuiteConfig, CaseConfig) {
        (self.suite, self.case)
    }
}
