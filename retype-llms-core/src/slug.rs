//! Slug generation and title recovery.

use regex::Regex;
use std::sync::OnceLock;

static DASH_RUN_REGEX: OnceLock<Regex> = OnceLock::new();

fn dash_run_regex() -> &'static Regex {
    DASH_RUN_REGEX.get_or_init(|| Regex::new(r"-+").unwrap())
}

/// Characters besides ASCII lowercase letters and digits that survive slugging.
const PUNCTUATION: &[char] = &['-', '_', '*', '!', '(', ')'];

/// Convert a string to a URL-safe slug
///
/// Rules:
/// - Lowercase
/// - Replace spaces with hyphens
/// - Delete everything outside `a-z`, `0-9`, `-`, `_`, `*`, `!`, `(`, `)`
/// - Collapse multiple hyphens
/// - Trim leading/trailing hyphens
///
/// Deleted characters are not replaced, so `"A///B"` becomes `"ab"`.
///
/// # Examples
///
/// ```
/// use retype_llms_core::slugify;
///
/// assert_eq!(slugify("Hello World!"), "hello-world!");
/// assert_eq!(slugify("Getting Started (Beta)"), "getting-started-(beta)");
/// assert_eq!(slugify("A///B"), "ab");
/// ```
pub fn slugify(input: &str) -> String {
    let lowercased = input.to_lowercase();

    let cleaned = lowercased
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || PUNCTUATION.contains(c))
        .collect::<String>();

    let collapsed = dash_run_regex().replace_all(&cleaned, "-");

    collapsed.trim_matches('-').to_string()
}

/// Turn a slug back into a display title.
///
/// Hyphens become spaces and every word is title-cased: a letter is
/// uppercased when it does not follow another letter and lowercased
/// otherwise, so `"2nd-step"` reads `"2Nd Step"`.
pub fn title_from_slug(slug: &str) -> String {
    let mut title = String::with_capacity(slug.len());
    let mut after_letter = false;

    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if after_letter {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            title.push(c);
            after_letter = false;
        }
    }

    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Getting Started"), "getting-started");
    }

    #[test]
    fn test_allowed_punctuation_survives() {
        assert_eq!(slugify("Hello World!"), "hello-world!");
        assert_eq!(slugify("snake_case_name"), "snake_case_name");
        assert_eq!(slugify("Footnotes (*)"), "footnotes-(*)");
    }

    #[test]
    fn test_invalid_characters_are_deleted() {
        assert_eq!(slugify("A///B"), "ab");
        assert_eq!(slugify("Node.js Tips"), "nodejs-tips");
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("Rust & Safety"), "rust-safety");
    }

    #[test]
    fn test_non_ascii_is_dropped() {
        assert_eq!(slugify("Café"), "caf");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn test_tabs_are_not_spaces() {
        assert_eq!(slugify("tab\tseparated"), "tabseparated");
    }

    #[test]
    fn test_multiple_spaces() {
        assert_eq!(slugify("Hello    World"), "hello-world");
        assert_eq!(slugify("a - b"), "a-b");
    }

    #[test]
    fn test_leading_trailing_hyphens() {
        assert_eq!(slugify("  Hello World  "), "hello-world");
        assert_eq!(slugify("-Leading Hyphen"), "leading-hyphen");
        assert_eq!(slugify("Trailing Hyphen-"), "trailing-hyphen");
    }

    #[test]
    fn test_empty_and_special_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("???"), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("/"), "");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for input in [
            "Hello World!",
            "A///B",
            "  --Weird__ (Input) -- ",
            "Café au lait",
            "MiXeD CaSe 123",
            "",
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_title_from_slug() {
        assert_eq!(title_from_slug("getting-started"), "Getting Started");
        assert_eq!(title_from_slug("hello-world!"), "Hello World!");
        assert_eq!(title_from_slug("api_reference"), "Api_Reference");
        assert_eq!(title_from_slug("2nd-step"), "2Nd Step");
        assert_eq!(title_from_slug(""), "");
    }
}
