//! Directory scanning for configuration fragments.
//!
//! The directory is opened once through `cap-std` and every fragment is read
//! relative to that handle, so a resolution never escapes the directory it
//! was pointed at.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};

use crate::{ConfError, ConfResult};

const JSON_EXTENSION: &str = "json";

/// An opened configuration directory.
#[derive(Debug)]
pub struct ConfigDir {
    root: Utf8PathBuf,
    dir: Dir,
}

impl ConfigDir {
    /// Opens `path` for fragment discovery.
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::DirectoryNotFound`] when the directory is missing
    /// or cannot be opened.
    pub fn open(path: &Utf8Path) -> ConfResult<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|err| ConfError::directory(path, err))?;
        Ok(Self {
            root: path.to_path_buf(),
            dir,
        })
    }

    /// Path the directory was opened from.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    /// Lists the `.json` files in the directory, sorted by name.
    ///
    /// Sorting makes the merge order independent of the platform's listing
    /// order. Directories named `*.json` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::DirectoryNotFound`] when the directory cannot be
    /// listed.
    pub fn json_files(&self) -> ConfResult<Vec<String>> {
        let entries = self
            .dir
            .entries()
            .map_err(|err| ConfError::directory(&self.root, err))?;
        let mut names = Vec::new();
        for listed in entries {
            let entry = listed.map_err(|err| ConfError::directory(&self.root, err))?;
            let name = entry
                .file_name()
                .map_err(|err| ConfError::directory(&self.root, err))?;
            if is_json_file_name(&name) && self.dir.is_file(&name) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Reads a file from the directory as UTF-8 text.
    pub(crate) fn read_to_string(&self, name: &str) -> ConfResult<String> {
        self.dir
            .read_to_string(name)
            .map_err(|err| ConfError::file(&self.root.join(name), err))
    }
}

/// Returns `true` when `name` carries the `.json` extension.
pub(crate) fn is_json_file_name(name: &str) -> bool {
    Utf8Path::new(name).extension() == Some(JSON_EXTENSION)
}

/// Returns the file name without its `.json` extension.
pub(crate) fn json_stem(name: &str) -> Option<&str> {
    if is_json_file_name(name) {
        Utf8Path::new(name).file_stem()
    } else {
        None
    }
}
