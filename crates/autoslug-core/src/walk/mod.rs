//! Tree traversal applying slug renames.
//!
//! Directories are renamed before their children so the recursion always
//! descends through the final names. In dry-run mode nothing is touched;
//! projected names are tracked per directory so conflicts and nested paths
//! are reported as they would happen.

mod change;
#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::AutoslugConfig;
use crate::ext;
use crate::glob;
use crate::slug::{self, SlugOptions};

use change::{apply_change, shown_join, ChangeResult};

/// All knobs for one walk. Start from [`WalkOptions::from_config`] and flip
/// the per-invocation flags.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Full recognized-extension set (built-in MIME list plus additions).
    pub ok_exts: BTreeSet<String>,
    /// Extensions whose stems join with underscores instead of dashes.
    pub no_dash_exts: BTreeSet<String>,
    /// Extensions skipped entirely.
    pub ignore_exts: BTreeSet<String>,
    /// Stems skipped entirely (name minus extension).
    pub ignore_stems: BTreeSet<String>,
    /// Glob patterns skipped entirely.
    pub ignore_globs: Vec<String>,
    /// Extension canonicalization (e.g. `.yml` → `.yaml`).
    pub ext_map: BTreeMap<String, String>,
    /// Leading affixes preserved verbatim.
    pub prefixes: BTreeSet<String>,
    /// Trailing affixes preserved verbatim.
    pub suffixes: BTreeSet<String>,
    /// Stem length budget (excluding extension).
    pub max_length: Option<usize>,
    /// Zero-pad numeric name prefixes to this many digits.
    pub num_digits: Option<u32>,
    /// Warn when a new path exceeds this many characters.
    pub warn_limit: Option<usize>,
    /// Count the run as failed when a new path exceeds this many characters.
    pub error_limit: Option<usize>,
    /// Do not rename the walk target itself, only its children.
    pub ignore_root: bool,
    /// Do not descend below the walk target.
    pub no_recurse: bool,
    /// Report instead of renaming.
    pub dry_run: bool,
    /// Rename through `git mv` so history follows the files.
    pub use_git: bool,
}

impl WalkOptions {
    pub fn from_config(cfg: &AutoslugConfig) -> Self {
        Self {
            ok_exts: ext::recognized_exts(cfg.ok_exts.iter().map(String::as_str)),
            no_dash_exts: cfg.no_dash_exts.iter().cloned().collect(),
            ignore_exts: cfg.ignore_exts.iter().cloned().collect(),
            ignore_stems: cfg.ignore_stems.iter().cloned().collect(),
            ignore_globs: cfg.ignore_globs.clone(),
            ext_map: cfg.ext_map.clone(),
            prefixes: cfg.prefixes.iter().cloned().collect(),
            suffixes: cfg.suffixes.iter().cloned().collect(),
            max_length: cfg.max_length,
            num_digits: cfg.num_digits,
            warn_limit: cfg.warn_limit,
            error_limit: cfg.error_limit,
            ignore_root: false,
            no_recurse: false,
            dry_run: false,
            use_git: false,
        }
    }

    fn slug_options(&self) -> SlugOptions<'_> {
        SlugOptions {
            prefixes: &self.prefixes,
            suffixes: &self.suffixes,
            max_length: self.max_length,
            num_digits: self.num_digits,
        }
    }
}

/// Counters for one walk. `is_clean` decides the process exit code: a clean
/// run renamed nothing and hit no conflicts, errors, or length violations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub renamed: u64,
    pub unchanged: u64,
    pub ignored: u64,
    pub conflicts: u64,
    pub errors: u64,
    pub over_limit: u64,
}

impl WalkSummary {
    pub fn is_clean(&self) -> bool {
        self.renamed == 0 && self.conflicts == 0 && self.errors == 0 && self.over_limit == 0
    }
}

impl fmt::Display for WalkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} renamed, {} unchanged, {} ignored, {} conflicts, {} errors, {} over limit",
            self.renamed,
            self.unchanged,
            self.ignored,
            self.conflicts,
            self.errors,
            self.over_limit
        )
    }
}

/// Walks `target` and applies (or, in dry-run, reports) slug renames.
pub fn walk(target: &Path, opts: &WalkOptions) -> WalkSummary {
    let mut summary = WalkSummary::default();
    let name = match target.file_name() {
        None => String::new(),
        Some(os) => match os.to_str() {
            Some(s) => s.to_string(),
            None => {
                tracing::warn!("skipping non-UTF-8 name: {}", target.display());
                summary.ignored += 1;
                return summary;
            }
        },
    };
    process_path(target, "", &name, true, None, opts, &mut summary);
    summary
}

fn process_path(
    real: &Path,
    shown_parent: &str,
    name: &str,
    is_root: bool,
    occupied: Option<&mut BTreeSet<String>>,
    opts: &WalkOptions,
    summary: &mut WalkSummary,
) {
    let shown_old = shown_join(shown_parent, name);
    let (stem, _) = ext::split_name(name);
    if opts.ignore_stems.contains(stem) {
        tracing::debug!("ignore: {shown_old}");
        summary.ignored += 1;
        return;
    }
    if opts
        .ignore_globs
        .iter()
        .any(|g| glob::matches(g, name, &shown_old))
    {
        tracing::debug!("ignore: {shown_old}");
        summary.ignored += 1;
        return;
    }

    let meta = match fs::symlink_metadata(real) {
        Ok(m) => m,
        Err(err) => {
            tracing::error!("cannot stat {shown_old}: {err}");
            summary.errors += 1;
            return;
        }
    };
    if meta.is_dir() {
        process_dir(real, shown_parent, name, is_root, occupied, opts, summary);
    } else {
        // Symlinks and special files are renamed by name like plain files.
        process_file(real, shown_parent, name, occupied, opts, summary);
    }
}

fn process_file(
    real: &Path,
    shown_parent: &str,
    name: &str,
    occupied: Option<&mut BTreeSet<String>>,
    opts: &WalkOptions,
    summary: &mut WalkSummary,
) {
    let (raw_stem, raw_ext) = ext::split_name(name);
    if !raw_ext.is_empty() && opts.ignore_exts.contains(raw_ext) {
        tracing::debug!("ignore: {}", shown_join(shown_parent, name));
        summary.ignored += 1;
        return;
    }
    // Unrecognized extensions are part of the stem and get slugified with it.
    let (stem, ext_part) = if !raw_ext.is_empty() && opts.ok_exts.contains(raw_ext) {
        (raw_stem, raw_ext)
    } else {
        (name, "")
    };
    let dash = !opts.no_dash_exts.contains(ext_part);
    let new_stem = slug::slugify_stem(stem, dash, &opts.slug_options());
    let new_name = format!("{new_stem}{}", ext::canonicalize(ext_part, &opts.ext_map));
    apply_change(real, shown_parent, name, &new_name, occupied, opts, summary);
}

fn process_dir(
    real: &Path,
    shown_parent: &str,
    name: &str,
    is_root: bool,
    occupied: Option<&mut BTreeSet<String>>,
    opts: &WalkOptions,
    summary: &mut WalkSummary,
) {
    let mut current = ChangeResult {
        real: real.to_path_buf(),
        name: name.to_string(),
    };
    let rename_self = !(is_root && opts.ignore_root) && !name.is_empty();
    if rename_self {
        let new_name = slug::slugify_stem(name, true, &opts.slug_options());
        current = apply_change(real, shown_parent, name, &new_name, occupied, opts, summary);
    }

    let shown_dir = shown_join(shown_parent, &current.name);
    if is_root && opts.no_recurse {
        tracing::debug!("ignore: {shown_dir}");
        return;
    }

    let entries = match fs::read_dir(&current.real) {
        Ok(rd) => rd,
        Err(err) => {
            tracing::error!("cannot read directory {shown_dir}: {err}");
            summary.errors += 1;
            return;
        }
    };
    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        match entry {
            // A non-UTF-8 name cannot collide with an ASCII slug, so it is
            // safe to skip without tracking it in the occupied set.
            Ok(e) => match e.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(os) => {
                    tracing::warn!("skipping non-UTF-8 name under {shown_dir}: {os:?}");
                    summary.ignored += 1;
                }
            },
            Err(err) => {
                tracing::error!("cannot read entry under {shown_dir}: {err}");
                summary.errors += 1;
            }
        }
    }
    names.sort();

    // Names currently (or, in dry-run, notionally) present in this directory,
    // kept up to date across renames for conflict detection.
    let mut occupied_children: BTreeSet<String> = names.iter().cloned().collect();
    for child in &names {
        process_path(
            &current.real.join(child),
            &shown_dir,
            child,
            false,
            Some(&mut occupied_children),
            opts,
            summary,
        );
    }
}
