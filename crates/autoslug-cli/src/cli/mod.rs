//! CLI for the autoslug recursive renamer.

use anyhow::{bail, Context, Result};
use autoslug_core::config;
use autoslug_core::git::{self, GitStatus};
use autoslug_core::walk::{self, WalkOptions};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

/// Rename files and directories to be URL-friendly.
///
/// Exits 0 when the tree was already conformant; 1 when anything was renamed
/// (or would be, with --dry-run), a conflict or filesystem error occurred, or
/// a resulting path exceeded --error-limit.
#[derive(Debug, Parser)]
#[command(name = "autoslug")]
#[command(about = "Rename files and directories to be URL-friendly", long_about = None)]
pub struct Cli {
    /// Path to the file or directory to process.
    #[arg(value_name = "path", required_unless_present = "completions")]
    pub path: Option<PathBuf>,

    /// Do not actually rename files or directories.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Disable protections and force processing outside a git repository.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Suppress all output except errors.
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report all paths processed, not only renamed ones.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Do not recurse into subdirectories.
    #[arg(long)]
    pub no_recurse: bool,

    /// Only process children of the specified path (implied when processing
    /// the current directory).
    #[arg(long)]
    pub ignore_root: bool,

    /// Also write a debug-level log to this file.
    #[arg(long, value_name = "path")]
    pub log_file: Option<PathBuf>,

    /// Attempt to shorten names to at most this many characters
    /// (excluding extension).
    #[arg(long, value_name = "n")]
    pub max_length: Option<usize>,

    /// Zero-pad numeric name prefixes to this many digits.
    #[arg(long, value_name = "n")]
    pub num_digits: Option<u32>,

    /// Warn when a resulting path exceeds this many characters.
    #[arg(long, value_name = "n")]
    pub warn_limit: Option<usize>,

    /// Exit failure when a resulting path exceeds this many characters.
    #[arg(long, value_name = "n")]
    pub error_limit: Option<usize>,

    /// Additional file extensions (without period) to recognize.
    #[arg(long = "ok-ext", value_name = "ext")]
    pub ok_exts: Vec<String>,

    /// Additional extensions (without period) whose names use underscores
    /// instead of dashes.
    #[arg(long = "no-dash-ext", value_name = "ext")]
    pub no_dash_exts: Vec<String>,

    /// Extensions (without period) to skip entirely.
    #[arg(long = "ignore-ext", value_name = "ext")]
    pub ignore_exts: Vec<String>,

    /// File or directory stems to skip entirely.
    #[arg(long = "ignore-stem", value_name = "stem")]
    pub ignore_stems: Vec<String>,

    /// Glob patterns to skip entirely.
    #[arg(long = "ignore-glob", value_name = "glob")]
    pub ignore_globs: Vec<String>,

    /// Additional name prefixes to leave unchanged.
    #[arg(long = "prefix", value_name = "prefix")]
    pub prefixes: Vec<String>,

    /// Additional name suffixes (before extension) to leave unchanged.
    #[arg(long = "suffix", value_name = "suffix")]
    pub suffixes: Vec<String>,

    /// Emit shell completions to stdout and exit.
    #[arg(long, value_name = "shell", value_enum)]
    pub completions: Option<Shell>,
}

/// Runs the CLI. Returns `Ok(true)` when the tree was already conformant.
pub fn run(cli: Cli) -> Result<bool> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "autoslug", &mut std::io::stdout());
        return Ok(true);
    }
    let Some(path) = cli.path.as_deref() else {
        bail!("missing <path> argument");
    };
    let target = path
        .canonicalize()
        .with_context(|| format!("specified path does not exist: {}", path.display()))?;

    let use_git = check_git(&target, cli.force)?;
    let ignore_root = cli.ignore_root || target == std::env::current_dir()?;

    let mut cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    cfg.ok_exts.extend(dotted(&cli.ok_exts));
    cfg.no_dash_exts.extend(dotted(&cli.no_dash_exts));
    cfg.ignore_exts.extend(dotted(&cli.ignore_exts));
    cfg.ignore_stems.extend(cli.ignore_stems.iter().cloned());
    cfg.ignore_globs.extend(cli.ignore_globs.iter().cloned());
    cfg.prefixes.extend(cli.prefixes.iter().cloned());
    cfg.suffixes.extend(cli.suffixes.iter().cloned());
    if cli.max_length.is_some() {
        cfg.max_length = cli.max_length;
    }
    if cli.num_digits.is_some() {
        cfg.num_digits = cli.num_digits;
    }
    if cli.warn_limit.is_some() {
        cfg.warn_limit = cli.warn_limit;
    }
    if cli.error_limit.is_some() {
        cfg.error_limit = cli.error_limit;
    }

    let mut opts = WalkOptions::from_config(&cfg);
    opts.ignore_root = ignore_root;
    opts.no_recurse = cli.no_recurse;
    opts.dry_run = cli.dry_run;
    opts.use_git = use_git && !cli.dry_run;

    let summary = walk::walk(&target, &opts);
    tracing::info!("done: {summary}");
    Ok(summary.is_clean())
}

/// Refuses to touch trees outside a git work tree unless forced: git is the
/// undo story for a bulk rename.
fn check_git(target: &std::path::Path, force: bool) -> Result<bool> {
    let probe = if target.is_dir() {
        target
    } else {
        target.parent().unwrap_or(target)
    };
    match git::repository_status(probe) {
        GitStatus::InsideRepo => Ok(true),
        status if force => {
            tracing::warn!("processing outside a git repository because of --force ({status:?})");
            Ok(false)
        }
        GitStatus::NotARepo => bail!(
            "specified path is not within a git repository: {}; \
             actions might be destructive and irreversible; \
             run again with --force to override and process anyway",
            target.display()
        ),
        GitStatus::Unavailable => bail!(
            "unable to determine whether path is within a git repository: {}; \
             run again with --force to override and process anyway",
            target.display()
        ),
    }
}

fn dotted(exts: &[String]) -> Vec<String> {
    exts.iter()
        .map(|e| {
            if e.starts_with('.') {
                e.clone()
            } else {
                format!(".{e}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests;
