//! Affix preservation.
//!
//! Leading prefix runs (default `_` and `.`) and trailing suffix runs
//! (default `_`) are peeled off before normalization and reattached verbatim,
//! which is what keeps dotfiles dotted and `__init`-style names intact.

use std::collections::BTreeSet;

/// Splits `stem` into `(prefix, core, suffix)`.
///
/// Repeated affixes are consumed greedily (longest match first), but the core
/// is never emptied: at least one character stays in the middle.
pub(crate) fn split_affixes(
    stem: &str,
    prefixes: &BTreeSet<String>,
    suffixes: &BTreeSet<String>,
) -> (String, String, String) {
    let mut start = 0;
    let mut end = stem.len();

    loop {
        let rest = &stem[start..end];
        let hit = prefixes
            .iter()
            .filter(|p| !p.is_empty() && rest.len() > p.len() && rest.starts_with(p.as_str()))
            .map(|p| p.len())
            .max();
        match hit {
            Some(len) => start += len,
            None => break,
        }
    }
    loop {
        let rest = &stem[start..end];
        let hit = suffixes
            .iter()
            .filter(|s| !s.is_empty() && rest.len() > s.len() && rest.ends_with(s.as_str()))
            .map(|s| s.len())
            .max();
        match hit {
            Some(len) => end -= len,
            None => break,
        }
    }

    (
        stem[..start].to_string(),
        stem[start..end].to_string(),
        stem[end..].to_string(),
    )
}
