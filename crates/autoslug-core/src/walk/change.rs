//! Applying a single rename: conflict checks, logging, summary accounting.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::rename::{self, RenameError};

use super::{WalkOptions, WalkSummary};

/// Where an entry ended up: `real` for filesystem access (unchanged in
/// dry-run), `name` for reporting.
pub(super) struct ChangeResult {
    pub real: PathBuf,
    pub name: String,
}

pub(super) fn shown_join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

/// Renames `real` to `new_name` within its directory (or records that it
/// would, in dry-run). Conflicts and filesystem failures are logged and
/// counted; the entry then keeps its old name so the walk can continue.
pub(super) fn apply_change(
    real: &Path,
    shown_parent: &str,
    old_name: &str,
    new_name: &str,
    occupied: Option<&mut BTreeSet<String>>,
    opts: &WalkOptions,
    summary: &mut WalkSummary,
) -> ChangeResult {
    let shown_old = shown_join(shown_parent, old_name);
    let unchanged = ChangeResult {
        real: real.to_path_buf(),
        name: old_name.to_string(),
    };

    if new_name == old_name {
        tracing::debug!("ok: {shown_old}");
        summary.unchanged += 1;
        check_limits(&shown_old, opts, summary);
        return unchanged;
    }
    if new_name.is_empty() {
        tracing::warn!("name reduces to nothing, leaving unchanged: {shown_old}");
        summary.unchanged += 1;
        return unchanged;
    }

    let shown_new = shown_join(shown_parent, new_name);
    let Some(parent) = real.parent() else {
        return unchanged;
    };
    let dest = parent.join(new_name);

    let conflict = match &occupied {
        Some(set) => set.contains(new_name),
        None => rename::destination_occupied(real, &dest),
    };
    if conflict {
        tracing::error!("conflict: {shown_old} -> {shown_new}");
        summary.conflicts += 1;
        check_limits(&shown_old, opts, summary);
        return unchanged;
    }

    if !opts.dry_run {
        if let Err(err) = rename::rename_path(real, &dest, opts.use_git) {
            match err {
                RenameError::Conflict { .. } => {
                    tracing::error!("conflict: {shown_old} -> {shown_new}");
                    summary.conflicts += 1;
                }
                RenameError::Io { source, .. } => {
                    tracing::error!("rename failed: {shown_old} -> {shown_new}: {source}");
                    summary.errors += 1;
                }
            }
            return unchanged;
        }
    }
    if let Some(set) = occupied {
        set.remove(old_name);
        set.insert(new_name.to_string());
    }
    tracing::info!("rename: {shown_old} -> {shown_new}");
    summary.renamed += 1;
    check_limits(&shown_new, opts, summary);

    ChangeResult {
        real: if opts.dry_run {
            real.to_path_buf()
        } else {
            dest
        },
        name: new_name.to_string(),
    }
}

/// Polices the length of the path an entry ends up with. Exceeding the error
/// limit fails the run; the warn limit only logs.
pub(super) fn check_limits(shown: &str, opts: &WalkOptions, summary: &mut WalkSummary) {
    let len = shown.chars().count();
    if let Some(limit) = opts.error_limit {
        if len > limit {
            tracing::error!("path exceeds {limit} characters: {shown}");
            summary.over_limit += 1;
            return;
        }
    }
    if let Some(limit) = opts.warn_limit {
        if len > limit {
            tracing::warn!("path exceeds {limit} characters: {shown}");
        }
    }
}
