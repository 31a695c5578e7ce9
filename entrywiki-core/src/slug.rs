//! Slug generation for entry and category titles.

use regex::Regex;
use std::sync::OnceLock;

static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();

fn whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Characters that would break a path segment or an HTML attribute
const FORBIDDEN_CHARS: &[char] = &['/', '\\', '?', '#', '%', ':', '|', '"', '<', '>', '.'];

/// Convert a title to a path-safe slug
///
/// Rules:
/// - Trim surrounding whitespace
/// - Remove `/ \ ? # % : | " < > .`
/// - Replace each whitespace run with a single hyphen
///
/// Case and non-latin letters are preserved, so CJK titles keep their
/// characters.
///
/// # Examples
///
/// ```
/// use entrywiki_core::slugify;
///
/// assert_eq!(slugify("Hello World"), "Hello-World");
/// assert_eq!(slugify("Node.js"), "Nodejs");
/// assert_eq!(slugify("佩洛瑪 百科"), "佩洛瑪-百科");
/// ```
pub fn slugify(input: &str) -> String {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .collect();

    whitespace_regex().replace_all(&cleaned, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("Hello World"), "Hello-World");
        assert_eq!(slugify("Virgo"), "Virgo");
    }

    #[test]
    fn test_forbidden_characters() {
        assert_eq!(slugify("a/b\\c"), "abc");
        assert_eq!(slugify("What? #1 100%"), "What-1-100");
        assert_eq!(slugify("Key: \"value\" <tag>"), "Key-value-tag");
        assert_eq!(slugify("v1.2|beta"), "v12beta");
    }

    #[test]
    fn test_unicode_is_kept() {
        assert_eq!(slugify("佩洛瑪百科"), "佩洛瑪百科");
        assert_eq!(slugify("Café naïve"), "Café-naïve");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(slugify("  Hello \t  World  "), "Hello-World");
        assert_eq!(slugify("a\nb"), "a-b");
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(slugify("CamelCase"), "CamelCase");
    }

    #[test]
    fn test_empty_and_forbidden_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("..."), "");
        assert_eq!(slugify("   "), "");
    }
}
