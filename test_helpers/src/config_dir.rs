//! Temporary configuration directories populated with JSON fragments.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use test_helpers::config_dir::ConfigDirFixture;
//!
//! let fixture = ConfigDirFixture::new()?;
//! fixture.write_json("suite.json", &json!({"cases": {}}))?;
//! assert!(fixture.path().join("suite.json").is_file());
//! # Ok::<_, anyhow::Error>(())
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory removed when the fixture is dropped.
pub struct ConfigDirFixture {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl ConfigDirFixture {
    /// Creates an empty temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// valid UTF-8.
    pub fn new() -> Result<Self> {
        let tmp = tempfile::tempdir().context("create temporary config dir")?;
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf())
            .map_err(|p| anyhow!("temporary path is not UTF-8: {}", p.display()))?;
        Ok(Self { _tmp: tmp, root })
    }

    /// Root of the directory.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    /// Writes `value` as pretty JSON to `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn write_json(&self, name: &str, value: &serde_json::Value) -> Result<&Self> {
        let body = serde_json::to_string_pretty(value).context("serialise fragment")?;
        self.write_raw(name, &body)
    }

    /// Writes `body` verbatim to `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn write_raw(&self, name: &str, body: &str) -> Result<&Self> {
        let path = self.root.join(name);
        std::fs::write(&path, body).with_context(|| format!("write {path}"))?;
        Ok(self)
    }
}
