//! Walker tests against real temp trees.

use super::{walk, WalkOptions};
use crate::config::AutoslugConfig;
use std::fs;
use std::path::Path;

fn opts() -> WalkOptions {
    WalkOptions::from_config(&AutoslugConfig::default())
}

fn touch(path: &Path) {
    fs::write(path, b"x").unwrap();
}

#[test]
fn renames_files_and_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("My Docs");
    fs::create_dir(&root).unwrap();
    touch(&root.join("Some File.txt"));

    let summary = walk(&root, &opts());
    assert_eq!(summary.renamed, 2);
    assert!(!summary.is_clean());
    assert!(tmp.path().join("my-docs").is_dir());
    assert!(tmp.path().join("my-docs/some-file.txt").is_file());
    assert!(!root.exists());
}

#[test]
fn conformant_tree_is_clean() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("my-docs");
    fs::create_dir(&root).unwrap();
    touch(&root.join("some-file.txt"));

    let summary = walk(&root, &opts());
    assert_eq!(summary.renamed, 0);
    assert_eq!(summary.unchanged, 2);
    assert!(summary.is_clean());
}

#[test]
fn dry_run_reports_without_touching() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("My Docs");
    fs::create_dir(&root).unwrap();
    touch(&root.join("Some File.txt"));

    let mut o = opts();
    o.dry_run = true;
    let summary = walk(&root, &o);
    assert_eq!(summary.renamed, 2);
    assert!(!summary.is_clean());
    // nothing moved
    assert!(root.is_dir());
    assert!(root.join("Some File.txt").is_file());
    assert!(!tmp.path().join("my-docs").exists());
}

#[test]
fn second_run_is_clean() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("Round Trip");
    fs::create_dir(&root).unwrap();
    touch(&root.join("Chapter One.md"));
    touch(&root.join("HTMLParser.py"));

    assert!(!walk(&root, &opts()).is_clean());
    let again = walk(&tmp.path().join("round-trip"), &opts());
    assert_eq!(again.renamed, 0);
    assert!(again.is_clean());
}

#[test]
fn dry_run_detects_conflicts() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("dup");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("Name File.txt"), b"old").unwrap();
    fs::write(root.join("name-file.txt"), b"kept").unwrap();

    let mut o = opts();
    o.dry_run = true;
    let summary = walk(&root, &o);
    assert_eq!(summary.conflicts, 1);
    assert!(!summary.is_clean());
    // nothing moved
    assert!(root.join("Name File.txt").is_file());
    assert_eq!(fs::read(root.join("name-file.txt")).unwrap(), b"kept");
}

#[test]
fn dry_run_projects_nested_renames() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("Outer Dir");
    fs::create_dir_all(root.join("Inner Dir")).unwrap();
    touch(&root.join("Inner Dir/Deep File.txt"));

    let mut o = opts();
    o.dry_run = true;
    let summary = walk(&root, &o);
    // the whole chain is reported even though no directory was renamed yet
    assert_eq!(summary.renamed, 3);
    assert!(root.join("Inner Dir/Deep File.txt").is_file());
    assert!(!tmp.path().join("outer-dir").exists());
}

#[test]
fn conflict_is_detected_and_skipped() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("dup");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("Name File.txt"), b"old").unwrap();
    fs::write(root.join("name-file.txt"), b"kept").unwrap();

    let summary = walk(&root, &opts());
    assert_eq!(summary.conflicts, 1);
    assert!(!summary.is_clean());
    assert!(root.join("Name File.txt").is_file());
    assert_eq!(fs::read(root.join("name-file.txt")).unwrap(), b"kept");
}

#[test]
fn ignore_stems_and_globs() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("repo");
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::create_dir(root.join("__pycache__")).unwrap();
    touch(&root.join("README.md"));
    touch(&root.join("LICENSE"));
    touch(&root.join(".git/Some File.txt"));

    let summary = walk(&root, &opts());
    assert_eq!(summary.ignored, 4);
    assert_eq!(summary.renamed, 0);
    assert!(root.join("README.md").is_file());
    assert!(root.join("LICENSE").is_file());
    assert!(root.join(".git/Some File.txt").is_file());
}

#[test]
fn ignored_extensions_are_skipped() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("pkg");
    fs::create_dir(&root).unwrap();
    touch(&root.join("Some Thing.lock"));

    let mut o = opts();
    o.ignore_exts.insert(".lock".to_string());
    let summary = walk(&root, &o);
    assert_eq!(summary.ignored, 1);
    assert!(root.join("Some Thing.lock").is_file());
}

#[test]
fn underscore_extensions_use_underscores() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("src");
    fs::create_dir(&root).unwrap();
    touch(&root.join("My Module.py"));

    walk(&root, &opts());
    assert!(root.join("my_module.py").is_file());
}

#[test]
fn yml_extension_is_canonicalized() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("cfg");
    fs::create_dir(&root).unwrap();
    touch(&root.join("Config File.yml"));
    touch(&root.join("settings.yaml"));

    let summary = walk(&root, &opts());
    assert!(root.join("config-file.yaml").is_file());
    assert!(root.join("settings.yaml").is_file());
    assert_eq!(summary.renamed, 1);
}

#[test]
fn unrecognized_extension_joins_the_stem() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("pics");
    fs::create_dir(&root).unwrap();
    touch(&root.join("Photo Shoot.JPG"));

    walk(&root, &opts());
    assert!(root.join("photo-shoot-jpg").is_file());
}

#[test]
fn dotfiles_keep_their_leading_dot() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("home");
    fs::create_dir(&root).unwrap();
    touch(&root.join(".bashrc"));
    touch(&root.join(".Hidden File"));

    let summary = walk(&root, &opts());
    assert!(root.join(".bashrc").is_file());
    assert!(root.join(".hidden-file").is_file());
    assert_eq!(summary.renamed, 1);
}

#[test]
fn no_recurse_stops_at_the_target() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("Outer Dir");
    fs::create_dir(&root).unwrap();
    touch(&root.join("Inner File.txt"));

    let mut o = opts();
    o.no_recurse = true;
    let summary = walk(&root, &o);
    assert_eq!(summary.renamed, 1);
    assert!(tmp.path().join("outer-dir/Inner File.txt").is_file());
}

#[test]
fn ignore_root_keeps_the_target_name() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("Messy Dir");
    fs::create_dir(&root).unwrap();
    touch(&root.join("Inner File.txt"));

    let mut o = opts();
    o.ignore_root = true;
    let summary = walk(&root, &o);
    assert_eq!(summary.renamed, 1);
    assert!(root.join("inner-file.txt").is_file());
}

#[test]
fn error_limit_marks_the_run_failed() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("dir");
    fs::create_dir(&root).unwrap();
    touch(&root.join("a-very-long-name.txt"));

    let mut o = opts();
    o.error_limit = Some(5);
    let summary = walk(&root, &o);
    assert_eq!(summary.renamed, 0);
    assert!(summary.over_limit >= 1);
    assert!(!summary.is_clean());
}

#[test]
fn warn_limit_leaves_the_run_clean() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("dir");
    fs::create_dir(&root).unwrap();
    touch(&root.join("a-very-long-name.txt"));

    let mut o = opts();
    o.warn_limit = Some(5);
    let summary = walk(&root, &o);
    assert_eq!(summary.over_limit, 0);
    assert!(summary.is_clean());
}

#[test]
fn summary_display_reports_every_counter() {
    let summary = super::WalkSummary {
        renamed: 1,
        unchanged: 2,
        ignored: 3,
        conflicts: 4,
        errors: 5,
        over_limit: 6,
    };
    assert_eq!(
        summary.to_string(),
        "1 renamed, 2 unchanged, 3 ignored, 4 conflicts, 5 errors, 6 over limit"
    );
}

#[cfg(unix)]
#[test]
fn non_utf8_names_are_skipped() {
    use std::os::unix::ffi::OsStrExt;

    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("mixed");
    fs::create_dir(&root).unwrap();
    let weird = root.join(std::ffi::OsStr::from_bytes(b"bad\xff name"));
    touch(&weird);
    touch(&root.join("Good File.txt"));

    let summary = walk(&root, &opts());
    assert_eq!(summary.errors, 0);
    assert_eq!(summary.ignored, 1);
    assert_eq!(summary.renamed, 1);
    assert!(weird.exists());
    assert!(root.join("good-file.txt").is_file());
}

#[test]
fn numeric_prefixes_are_padded() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("book");
    fs::create_dir(&root).unwrap();
    touch(&root.join("1 Introduction.md"));

    let mut o = opts();
    o.num_digits = Some(2);
    walk(&root, &o);
    assert!(root.join("01-introduction.md").is_file());
}

#[test]
fn max_length_drops_trailing_tokens() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("notes");
    fs::create_dir(&root).unwrap();
    touch(&root.join("A Very Long Name.txt"));

    let mut o = opts();
    o.max_length = Some(10);
    walk(&root, &o);
    assert!(root.join("a-very.txt").is_file());
}
