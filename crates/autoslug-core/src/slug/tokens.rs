//! Token splitting for stem normalization.
//!
//! Splits an ASCII-folded stem on every non-alphanumeric character and on
//! camelCase boundaries, yielding lowercase tokens ready to be joined with
//! a dash or underscore.

/// Splits `s` into lowercase tokens.
///
/// Boundaries:
/// - any non-alphanumeric character (consumed),
/// - before an uppercase letter that follows a lowercase letter or digit
///   (`camelCase`, `file2Name`),
/// - before the last capital of an acronym run followed by lowercase
///   (`HTMLParser` → `html`, `parser`).
pub(crate) fn split_tokens(s: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;
    let mut upper_run = 0usize;

    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            flush(&mut tokens, &mut current);
            prev = None;
            upper_run = 0;
            continue;
        }
        if c.is_ascii_uppercase() {
            if prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit()) {
                flush(&mut tokens, &mut current);
            }
            upper_run += 1;
        } else {
            if c.is_ascii_lowercase() && upper_run >= 2 {
                // Acronym run ends here: its last capital starts this token.
                let head = current.pop();
                flush(&mut tokens, &mut current);
                current.extend(head);
            }
            upper_run = 0;
        }
        current.push(c.to_ascii_lowercase());
        prev = Some(c);
    }
    flush(&mut tokens, &mut current);
    tokens
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        split_tokens(s)
    }

    #[test]
    fn splits_on_separators() {
        assert_eq!(toks("My File (v2)"), ["my", "file", "v2"]);
        assert_eq!(toks("a..b--c__d"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn splits_camel_case() {
        assert_eq!(toks("camelCase"), ["camel", "case"]);
        assert_eq!(toks("CamelCase"), ["camel", "case"]);
        assert_eq!(toks("file2Name"), ["file2", "name"]);
    }

    #[test]
    fn acronym_run_keeps_last_capital() {
        assert_eq!(toks("HTMLParser"), ["html", "parser"]);
        assert_eq!(toks("parseHTML"), ["parse", "html"]);
        assert_eq!(toks("XMLHttpRequest"), ["xml", "http", "request"]);
    }

    #[test]
    fn digit_runs_stay_attached_to_lowercase() {
        assert_eq!(toks("file2name"), ["file2name"]);
        assert_eq!(toks("2024Report"), ["2024", "report"]);
    }

    #[test]
    fn empty_and_separator_only() {
        assert!(toks("").is_empty());
        assert!(toks("--- ---").is_empty());
    }
}
