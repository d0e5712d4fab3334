//! Extension recognition and canonicalization.
//!
//! A name only keeps its extension out of slugification when the extension is
//! recognized (built-in MIME-style list plus configured additions). Anything
//! else is treated as part of the stem. Matching is case-sensitive, so `.R`
//! is recognized while `.JPG` is not unless added.

use std::collections::{BTreeMap, BTreeSet};

/// Extensions recognized out of the box on top of the MIME-style list.
pub const DEFAULT_OK_EXTS: &[&str] = &[
    ".cmd", ".ipynb", ".md", ".ps1", ".R", ".Rmd", ".rst", ".yaml", ".yml",
];

/// Extensions whose stems are joined with underscores instead of dashes.
pub const DEFAULT_NO_DASH_EXTS: &[&str] = &[".py"];

/// Common MIME-type extensions (documents, images, audio, video, archives,
/// fonts, code). Mirrors what a platform MIME registry typically knows.
const MIME_EXTS: &[&str] = &[
    ".7z", ".aac", ".avi", ".bin", ".bmp", ".bz2", ".c", ".css", ".csv", ".doc", ".docx", ".eot",
    ".epub", ".gif", ".gz", ".h", ".htm", ".html", ".ico", ".ics", ".jar", ".jpeg", ".jpg", ".js",
    ".json", ".mid", ".mov", ".mp3", ".mp4", ".mpeg", ".odp", ".ods", ".odt", ".oga", ".ogg",
    ".ogv", ".opus", ".otf", ".pdf", ".png", ".ppt", ".pptx", ".py", ".rar", ".rtf", ".sh", ".svg",
    ".tar", ".tif", ".tiff", ".toml", ".ts", ".ttf", ".txt", ".wav", ".weba", ".webm", ".webp",
    ".woff", ".woff2", ".xhtml", ".xls", ".xlsx", ".xml", ".zip",
];

/// Builds the full recognized-extension set: MIME list plus `additions`
/// (which normally carry the configured defaults and any CLI extras).
pub fn recognized_exts<'a, I>(additions: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut set: BTreeSet<String> = MIME_EXTS.iter().map(|e| e.to_string()).collect();
    set.extend(additions.into_iter().map(|e| e.to_string()));
    set
}

/// Splits a file name into `(stem, extension)` at the last dot.
///
/// A leading dot never starts an extension, so `.bashrc` is all stem. The
/// extension includes its dot (`"archive.tar.gz"` → `("archive.tar", ".gz")`).
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Applies the extension mapping (default `.yml` → `.yaml`); unmapped
/// extensions pass through unchanged.
pub fn canonicalize<'a>(ext: &'a str, map: &'a BTreeMap<String, String>) -> &'a str {
    map.get(ext).map(String::as_str).unwrap_or(ext)
}
