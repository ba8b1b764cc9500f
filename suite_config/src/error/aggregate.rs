//! Aggregation container for multiple `ConfError` values.

use std::{error::Error, fmt, sync::Arc};

use super::ConfError;

/// Collection of [`ConfError`]s produced during a single resolution attempt.
///
/// Fragment loading keeps going after a malformed file so every broken
/// fragment in a directory is reported at once.
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<Arc<ConfError>>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<Arc<ConfError>>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &ConfError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the aggregation holds no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl IntoIterator for AggregatedErrors {
    type Item = Arc<ConfError>;
    type IntoIter = std::vec::IntoIter<Arc<ConfError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
