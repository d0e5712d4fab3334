//! Rename plumbing.
//!
//! Renames stay within one directory (only the final component changes).
//! Inside a git work tree `git mv` is preferred so history follows the file;
//! it falls back to a plain filesystem rename when git refuses (e.g. the
//! path is untracked).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

/// Why a rename did not happen.
#[derive(Debug, Error)]
pub enum RenameError {
    /// The destination name is already taken by a different entry.
    #[error("destination already exists: {}", .to.display())]
    Conflict { from: PathBuf, to: PathBuf },
    /// The underlying filesystem rename failed (permissions, read-only fs).
    #[error("rename failed: {} -> {}", .from.display(), .to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Renames `from` to `to`, refusing to clobber an existing entry.
pub fn rename_path(from: &Path, to: &Path, use_git: bool) -> Result<(), RenameError> {
    if destination_occupied(from, to) {
        return Err(RenameError::Conflict {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }
    if use_git && git_mv(from, to) {
        return Ok(());
    }
    fs::rename(from, to).map_err(|source| RenameError::Io {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// True when `to` exists and is not the same entry as `from` (a pure case
/// change on a case-insensitive filesystem resolves to the same entry and is
/// not a conflict).
pub fn destination_occupied(from: &Path, to: &Path) -> bool {
    if !to.exists() {
        return false;
    }
    match (fs::canonicalize(from), fs::canonicalize(to)) {
        (Ok(a), Ok(b)) => a != b,
        _ => true,
    }
}

fn git_mv(from: &Path, to: &Path) -> bool {
    let (Some(parent), Some(old), Some(new)) = (from.parent(), from.file_name(), to.file_name())
    else {
        return false;
    };
    Command::new("git")
        .arg("mv")
        .arg(old)
        .arg(new)
        .current_dir(parent)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
