//! Content-inclusion glob matching.
//!
//! This is deliberately a simpler pattern language than the ignore rules:
//! positive globs only, no negation and no directory anchors. A path that
//! fails to match is still listed in the traversal output, just without its
//! content attached.

use regex::Regex;
use tracing::warn;

/// Split a comma-separated pattern argument into a pattern list.
pub fn split_patterns(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Whether a root-relative path satisfies any pattern in the list.
pub fn matches_any(path: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| matches_pattern(path, p))
}

fn matches_pattern(path: &str, pattern: &str) -> bool {
    // A trailing "/**/*" selects the same paths as "/**/".
    let pattern = match pattern.strip_suffix("/**/*") {
        Some(head) => format!("{head}/**/"),
        None => pattern.to_string(),
    };

    // Whole-subtree patterns reduce to a prefix comparison.
    if pattern.ends_with("/**/") || pattern.ends_with("/**") {
        let cut = pattern.len().saturating_sub(4);
        return path.as_bytes().starts_with(&pattern.as_bytes()[..cut]);
    }

    match compile(&pattern) {
        Ok(re) => re.is_match(path),
        Err(e) => {
            warn!(pattern = %pattern, error = %e, "Skipping unparsable content pattern");
            false
        }
    }
}

/// Compile a glob into an anchored regex: `**` matches across segments,
/// `*` within one segment, `?` a single character.
fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    let mut re = String::with_capacity(pattern.len() * 2 + 2);
    re.push('^');
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                re.push_str(".*");
            }
            '*' => re.push_str("[^/]*"),
            '?' => re.push('.'),
            c => {
                if "\\.+()[]{}^$|".contains(c) {
                    re.push('\\');
                }
                re.push(c);
            }
        }
    }
    re.push('$');
    Regex::new(&re)
}
