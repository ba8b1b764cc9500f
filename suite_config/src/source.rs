//! Location of the configuration fragments for a test file.

use camino::{Utf8Path, Utf8PathBuf};

const SPEC_SUFFIX: &str = ".spec";

/// Directory holding a suite's fragments plus an optional preferred stem.
///
/// When a fragment named `<stem>.json` exists it becomes the only source;
/// otherwise every `.json` file in the directory is merged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigSource {
    directory: Utf8PathBuf,
    preferred_stem: Option<String>,
}

impl ConfigSource {
    /// Creates a source that merges every fragment in `directory`.
    #[must_use]
    pub fn new(directory: impl Into<Utf8PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            preferred_stem: None,
        }
    }

    /// Derives the source for a test file.
    ///
    /// A path with an extension is treated as the test file itself: its
    /// parent becomes the directory and its name, minus the extension and any
    /// `.spec` suffix, the preferred stem. Any other path is used as the
    /// directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use suite_config::ConfigSource;
    ///
    /// let source = ConfigSource::for_test_file("tests/zero_config/sort_table.spec.rs");
    /// assert_eq!(source.directory(), "tests/zero_config");
    /// assert_eq!(source.preferred_stem(), Some("sort_table"));
    ///
    /// let dir_only = ConfigSource::for_test_file("tests/zero_config");
    /// assert_eq!(dir_only.preferred_stem(), None);
    /// ```
    #[must_use]
    pub fn for_test_file(path: impl AsRef<Utf8Path>) -> Self {
        let test_path = path.as_ref();
        if test_path.extension().is_none() {
            return Self::new(test_path);
        }
        let directory = test_path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let stem = test_path
            .file_stem()
            .map(|stem| stem.strip_suffix(SPEC_SUFFIX).unwrap_or(stem))
            .filter(|stem| !stem.is_empty());
        Self {
            directory: directory.to_path_buf(),
            preferred_stem: stem.map(str::to_owned),
        }
    }

    /// Prefers `<stem>.json` over merging the whole directory.
    #[must_use]
    pub fn with_preferred_stem(mut self, stem: impl Into<String>) -> Self {
        self.preferred_stem = Some(stem.into());
        self
    }

    /// Directory holding the fragments.
    #[must_use]
    pub fn directory(&self) -> &Utf8Path {
        &self.directory
    }

    /// Preferred fragment stem, if any.
    #[must_use]
    pub fn preferred_stem(&self) -> Option<&str> {
        self.preferred_stem.as_deref()
    }
}
