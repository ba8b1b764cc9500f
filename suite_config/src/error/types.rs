//! Primary error enum for configuration resolution.

use camino::Utf8PathBuf;
use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors that can occur while resolving a test's configuration.
///
/// Every variant is fatal for the test that triggered it: nothing is retried
/// and no partially resolved configuration is handed to the test body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfError {
    /// The configuration directory is missing or cannot be listed.
    #[error("configuration directory '{path}' could not be read: {source}")]
    DirectoryNotFound {
        /// Directory that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A configuration fragment could not be read or parsed.
    #[error("configuration file error in '{path}': {source}")]
    File {
        /// Fragment that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported while reading or parsing.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The case name was empty or the configuration carries no `cases` map.
    #[error("cannot find config for the test case '{case}'")]
    MissingCaseConfig {
        /// Case name that was requested.
        case: String,
    },

    /// A test title did not carry exactly one `@TC_` marker.
    #[error(
        "invalid code name in '{title}' (found {found}); attach exactly one code name \
         to the test with the format @TC_<codename>"
    )]
    InvalidTestIdentity {
        /// Title that was inspected.
        title: String,
        /// Number of markers found.
        found: usize,
    },

    /// A configuration value did not have the type requested by the caller.
    #[error("configuration value '{key}' has an unexpected shape: {source}")]
    Value {
        /// Key that was read.
        key: String,
        /// Deserialisation failure.
        #[source]
        source: serde_json::Error,
    },

    /// Runner profile overrides could not be extracted.
    #[error("failed to load runner profile: {0}")]
    Profile(#[from] Box<figment::Error>),

    /// Multiple errors occurred while resolving configuration.
    #[error("multiple configuration errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
