//! Constructors and aggregation helpers for `ConfError`.

use std::error::Error;
use std::sync::Arc;

use camino::Utf8Path;

use super::{AggregatedErrors, ConfError};

impl ConfError {
    /// Builds a [`ConfError`] from an iterator of errors.
    ///
    /// Returns `None` for an empty iterator, the inner error when a single
    /// uniquely owned error is supplied, and [`Self::Aggregate`] otherwise.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.len() > 1 {
            return Some(Self::Aggregate(Box::new(AggregatedErrors::new(arcs))));
        }
        let last = arcs.pop()?;
        Some(match Arc::try_unwrap(last) {
            Ok(err) => err,
            Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
        })
    }

    /// Construct a [`ConfError::File`] for a fragment path.
    #[must_use]
    pub fn file(path: &Utf8Path, err: impl Into<Box<dyn Error + Send + Sync>>) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source: err.into(),
        })
    }

    /// Construct a [`ConfError::File`] describing malformed fragment content.
    #[must_use]
    pub fn invalid_data(path: &Utf8Path, msg: impl Into<String>) -> Arc<Self> {
        Self::file(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, msg.into()),
        )
    }

    /// Construct a [`ConfError::DirectoryNotFound`] for `path`.
    #[must_use]
    pub fn directory(path: &Utf8Path, source: std::io::Error) -> Arc<Self> {
        Arc::new(Self::DirectoryNotFound {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Construct a [`ConfError::MissingCaseConfig`] for `case`.
    #[must_use]
    pub fn missing_case(case: &str) -> Arc<Self> {
        Arc::new(Self::MissingCaseConfig {
            case: case.to_owned(),
        })
    }
}
