//! Report writers for `suite-conf`.

use std::io::Write;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use serde_json::Value;

use crate::cli::OutputArgs;
use crate::error::CliError;

fn render(report: &Value, is_compact: bool) -> Result<String, CliError> {
    let body = if is_compact {
        serde_json::to_string(report)?
    } else {
        serde_json::to_string_pretty(report)?
    };
    Ok(body)
}

/// Writes `report` where `output` says: a file when `--out` is given,
/// otherwise `stdout`.
///
/// # Errors
///
/// Returns [`CliError::Io`] or [`CliError::Stdout`] when the write fails.
pub fn write_report(report: &Value, output: &OutputArgs) -> Result<(), CliError> {
    let body = render(report, output.is_compact)?;
    match &output.out {
        Some(path) => write_file(path, &body),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{body}").map_err(CliError::Stdout)
        }
    }
}

/// Writes `body` to `path`, creating the parent directory when needed.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the directory or file cannot be written.
pub fn write_file(path: &Utf8Path, body: &str) -> Result<(), CliError> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path.file_name().ok_or_else(|| CliError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let dir = ensure_dir(parent)?;
    let mut file = dir
        .open_with(
            name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| CliError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })?;
    writeln!(file, "{body}").map_err(|io_err| CliError::Io {
        path: path.to_path_buf(),
        source: io_err,
    })
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, CliError> {
    let to_cli = |io_err| CliError::Io {
        path: path.to_path_buf(),
        source: io_err,
    };
    Dir::create_ambient_dir_all(path, ambient_authority()).map_err(to_cli)?;
    Dir::open_ambient_dir(path, ambient_authority()).map_err(to_cli)
}
