//! Git repository detection.
//!
//! Renames are destructive; inside a git work tree the user can undo them, so
//! the CLI refuses to run elsewhere unless forced.

use std::path::Path;
use std::process::{Command, Stdio};

/// Outcome of probing `git -C <path> rev-parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStatus {
    /// The path is inside a git work tree.
    InsideRepo,
    /// git ran but the path is not inside a work tree.
    NotARepo,
    /// git itself could not be executed.
    Unavailable,
}

/// Probes whether `path` is inside a git work tree.
pub fn repository_status(path: &Path) -> GitStatus {
    let status = Command::new("git")
        .arg("-C")
        .arg(path)
        .arg("rev-parse")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    match status {
        Ok(s) if s.success() => GitStatus::InsideRepo,
        Ok(_) => GitStatus::NotARepo,
        Err(_) => GitStatus::Unavailable,
    }
}
