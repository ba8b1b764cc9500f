//! Per-test configuration handed to page objects and test bodies.
//!
//! A test identifies itself by its source file and title. The title's
//! `@TC_<id>` marker names the case, the file's directory holds the
//! fragments, and the environment picks the overlay.

use camino::Utf8Path;

use crate::{
    ConfResult,
    environment::Environment,
    identity::case_id_from_title,
    resolve::Config,
    source::ConfigSource,
    suite::{CaseConfig, SuiteConfig},
};

/// Resolved configuration scoped to one running test.
#[derive(Clone, Debug, PartialEq)]
pub struct TestConfig {
    config: Config,
}

impl TestConfig {
    /// Resolves the configuration for the test titled `title` in `test_file`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfError::InvalidTestIdentity`] before touching the
    /// filesystem when the title does not carry exactly one marker, and any
    /// error from [`Config::resolve`] afterwards.
    pub fn for_test(
        test_file: &Utf8Path,
        title: &str,
        environment: Option<&Environment>,
    ) -> ConfResult<Self> {
        let case_name = case_id_from_title(title)?;
        let source = ConfigSource::for_test_file(test_file);
        let config = Config::resolve(&source, &case_name, environment)?;
        Ok(Self { config })
    }

    /// Like [`Self::for_test`], reading the environment from `ENV`.
    ///
    /// # Errors
    ///
    /// See [`Self::for_test`].
    pub fn for_test_from_env(test_file: &Utf8Path, title: &str) -> ConfResult<Self> {
        Self::for_test(test_file, title, Environment::from_env().as_ref())
    }

    /// The full resolved configuration.
    #[must_use]
    pub const fn conf(&self) -> &Config {
        &self.config
    }

    /// Suite-wide settings.
    #[must_use]
    pub const fn suite_conf(&self) -> &SuiteConfig {
        self.config.suite()
    }

    /// Settings for this test's case.
    #[must_use]
    pub const fn case_conf(&self) -> &CaseConfig {
        self.config.case()
    }
}
