//! Artifact writing
//!
//! Artifacts are rendered fully in memory before anything touches disk.
//! Each write goes through a sibling temporary file and a rename, so an
//! interrupted or failed run never leaves a truncated artifact at the
//! destination, and a build system watching the output sees either the
//! old file or the new one.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for artifact writing failures.
#[derive(Debug, Error)]
#[error("cannot write '{path}': {source}")]
pub struct OutputError {
    pub path: String,
    #[source]
    pub source: io::Error,
}

/// Write `contents` to `path` through a sibling `.tmp` file.
///
/// Missing parent directories are created. An existing file at `path` is
/// replaced.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), OutputError> {
    let fail = |source| OutputError {
        path: path.display().to_string(),
        source,
    };

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(fail)?;
        }
    }

    let staging = staging_path(path);
    fs::write(&staging, contents).map_err(fail)?;
    if let Err(source) = rename_over(&staging, path) {
        // Don't leave the staging file around on failure.
        let _ = fs::remove_file(&staging);
        return Err(fail(source));
    }
    Ok(())
}

/// Rename, retrying once after removing the destination. Unix renames
/// replace the destination themselves; Windows renames refuse to.
fn rename_over(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(_) if to.exists() => {
            fs::remove_file(to)?;
            fs::rename(from, to)
        }
        Err(e) => Err(e),
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".tmp");
    path.with_file_name(name)
}
