//! Tests for repeatable list options and extension dotting.

use super::parse;
use crate::cli::dotted;

#[test]
fn repeated_extension_flags_accumulate() {
    let cli = parse(&[
        "autoslug",
        "--ok-ext",
        "tex",
        "--ok-ext",
        "bib",
        "--no-dash-ext",
        "rs",
        "dir",
    ]);
    assert_eq!(cli.ok_exts, ["tex", "bib"]);
    assert_eq!(cli.no_dash_exts, ["rs"]);
}

#[test]
fn ignore_lists_accumulate() {
    let cli = parse(&[
        "autoslug",
        "--ignore-glob",
        "node_modules",
        "--ignore-glob",
        "*.lock",
        "--ignore-stem",
        "CHANGELOG",
        "--ignore-ext",
        "lock",
        "dir",
    ]);
    assert_eq!(cli.ignore_globs, ["node_modules", "*.lock"]);
    assert_eq!(cli.ignore_stems, ["CHANGELOG"]);
    assert_eq!(cli.ignore_exts, ["lock"]);
}

#[test]
fn affix_flags_accumulate() {
    let cli = parse(&["autoslug", "--prefix", "~$", "--suffix", "-", "dir"]);
    assert_eq!(cli.prefixes, ["~$"]);
    assert_eq!(cli.suffixes, ["-"]);
}

#[test]
fn dotted_adds_missing_periods() {
    let exts = vec!["md".to_string(), ".tex".to_string()];
    assert_eq!(dotted(&exts), [".md", ".tex"]);
}
