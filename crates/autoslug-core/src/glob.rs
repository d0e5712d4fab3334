//! Minimal glob matching for ignore patterns.
//!
//! `?` matches one character, `*` any run within a path component, `**` any
//! run across components. Patterns without `/` are matched against the entry
//! name; patterns with `/` against the walk-root-relative path.

/// Returns true when `pattern` matches the entry.
pub fn matches(pattern: &str, name: &str, rel_path: &str) -> bool {
    let target = if pattern.contains('/') { rel_path } else { name };
    let pat: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = target.chars().collect();
    glob_match(&pat, &text)
}

fn glob_match(pat: &[char], text: &[char]) -> bool {
    let Some(&head) = pat.first() else {
        return text.is_empty();
    };
    match head {
        '*' if pat.get(1) == Some(&'*') => {
            // `**` also swallows a following separator so `a/**/b` matches `a/b`.
            let mut rest = &pat[2..];
            if rest.first() == Some(&'/') {
                if glob_match(&rest[1..], text) {
                    return true;
                }
                rest = &pat[2..];
            }
            (0..=text.len()).any(|i| glob_match(rest, &text[i..]))
        }
        '*' => {
            let mut i = 0;
            loop {
                if glob_match(&pat[1..], &text[i..]) {
                    return true;
                }
                if i >= text.len() || text[i] == '/' {
                    return false;
                }
                i += 1;
            }
        }
        '?' => {
            !text.is_empty() && text[0] != '/' && glob_match(&pat[1..], &text[1..])
        }
        c => !text.is_empty() && text[0] == c && glob_match(&pat[1..], &text[1..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_names() {
        assert!(matches(".git", ".git", "repo/.git"));
        assert!(!matches(".git", ".github", "repo/.github"));
    }

    #[test]
    fn star_within_component() {
        assert!(matches("*.log", "build.log", "out/build.log"));
        assert!(matches("*cache*", "__pycache__", "pkg/__pycache__"));
        assert!(!matches("*.log", "a/b.log", "a/b.log"));
    }

    #[test]
    fn question_mark() {
        assert!(matches("v?", "v2", "v2"));
        assert!(!matches("v?", "v10", "v10"));
    }

    #[test]
    fn path_patterns_use_relative_path() {
        assert!(matches("docs/*.md", "api.md", "docs/api.md"));
        assert!(!matches("docs/*.md", "api.md", "src/api.md"));
    }

    #[test]
    fn double_star_crosses_components() {
        assert!(matches("**/target", "target", "a/b/target"));
        assert!(matches("vendor/**", "x.js", "vendor/pkg/x.js"));
        assert!(matches("a/**/b", "b", "a/b"));
        assert!(matches("a/**/b", "b", "a/x/y/b"));
    }
}
