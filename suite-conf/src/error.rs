//! Error types for `suite-conf`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use suite_config::ConfError;
use thiserror::Error;

/// Errors surfaced by `suite-conf` commands.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// Resolving configuration or runner settings failed.
    #[error(transparent)]
    Config(#[from] Arc<ConfError>),

    /// The report could not be serialised.
    #[error("failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the report to a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File or directory being written.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing the report to standard output failed.
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}
