//! Stem normalization.
//!
//! Turns an arbitrary file or directory stem into a URL-safe slug: affix
//! preservation, ASCII folding, token splitting (incl. camelCase), joining
//! with dash or underscore, numeric-prefix padding, and length limiting.

mod affixes;
mod fold;
mod tokens;

use std::collections::BTreeSet;

/// Knobs shared by every stem transformation in one run. The dash/underscore
/// choice is per file (driven by its extension) and passed separately.
#[derive(Debug, Clone, Copy)]
pub struct SlugOptions<'a> {
    /// Leading affixes preserved verbatim (e.g. `_`, `.`).
    pub prefixes: &'a BTreeSet<String>,
    /// Trailing affixes preserved verbatim (e.g. `_`).
    pub suffixes: &'a BTreeSet<String>,
    /// Target length for the slug (excluding extension); trailing tokens are
    /// dropped to fit, but the first token is always kept.
    pub max_length: Option<usize>,
    /// Zero-pad a leading all-digit token to this many digits.
    pub num_digits: Option<u32>,
}

/// Normalizes a stem into a slug.
///
/// `dash` selects the join separator: `-` for most names, `_` for stems whose
/// extension is configured as underscore-separated. The result is empty only
/// when the stem contains nothing representable and has no affixes.
pub fn slugify_stem(stem: &str, dash: bool, opts: &SlugOptions) -> String {
    let (prefix, core, suffix) = affixes::split_affixes(stem, opts.prefixes, opts.suffixes);
    let folded = fold::fold_to_ascii(&core);
    let mut tokens = tokens::split_tokens(&folded);

    let sep = if dash { "-" } else { "_" };
    let digits = opts
        .num_digits
        .and_then(|n| extract_leading_digits(&mut tokens, n));

    if let Some(max) = opts.max_length {
        let mut budget = max.saturating_sub(prefix.len());
        if let Some(d) = &digits {
            budget = budget.saturating_sub(d.len() + sep.len());
        }
        shorten(&mut tokens, budget, sep.len());
    }

    let joined = tokens.join(sep);
    let mut out = prefix;
    if let Some(d) = digits {
        out.push_str(&d);
        if !joined.is_empty() {
            out.push_str(sep);
        }
    }
    out.push_str(&joined);
    out.push_str(&suffix);
    out
}

/// Pops a leading all-digit token when the next token is alphabetic, clamping
/// the value to `10^n - 1` and zero-padding to width `n`.
fn extract_leading_digits(tokens: &mut Vec<String>, n: u32) -> Option<String> {
    let first = tokens.first()?;
    let second = tokens.get(1)?;
    if !first.chars().all(|c| c.is_ascii_digit())
        || !second.chars().all(|c| c.is_ascii_alphabetic())
    {
        return None;
    }
    let limit = 10u64
        .checked_pow(n)
        .map(|p| p - 1)
        .unwrap_or(u64::MAX);
    let value = first.parse::<u64>().unwrap_or(u64::MAX).min(limit);
    tokens.remove(0);
    Some(format!("{value:0width$}", width = n as usize))
}

/// Drops trailing tokens until the joined length fits `budget`. The first
/// token survives even when it alone exceeds the budget.
fn shorten(tokens: &mut Vec<String>, budget: usize, sep_len: usize) {
    if tokens.is_empty() {
        return;
    }
    let total: usize = tokens.iter().map(String::len).sum::<usize>() + sep_len * (tokens.len() - 1);
    if total <= budget {
        return;
    }
    let mut len = tokens[0].len();
    let mut keep = 1;
    for t in &tokens[1..] {
        if len + sep_len + t.len() > budget {
            break;
        }
        len += sep_len + t.len();
        keep += 1;
    }
    tokens.truncate(keep);
}
