//! Rewriting of relative markdown links and images into absolute URLs.

use regex::{Captures, Regex};
use std::sync::OnceLock;

static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
static LINK_REGEX: OnceLock<Regex> = OnceLock::new();

fn image_regex() -> &'static Regex {
    IMAGE_REGEX.get_or_init(|| Regex::new(r"!\[([^\]\n]*)\]\(([^)\n]+)\)").unwrap())
}

fn link_regex() -> &'static Regex {
    LINK_REGEX.get_or_init(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\n]+)\)").unwrap())
}

/// Rewrites relative targets against a base URL.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    /// Scheme and authority, e.g. "https://example.com"
    domain: String,
    /// Path of the base URL without trailing slash, e.g. "/docs" (may be empty)
    base_path: String,
}

impl LinkRewriter {
    /// Split a base URL into domain and base path. Returns `None` for an
    /// empty base URL, in which case links are left as they are.
    ///
    /// The split is textual and keeps every part as written: no
    /// percent-encoding, no host lowercasing, no port normalization.
    pub fn new(base_url: &str) -> Option<Self> {
        if base_url.is_empty() {
            return None;
        }

        let (scheme, netloc, path) = split_url(base_url);
        Some(Self {
            domain: format!("{}://{}", scheme, netloc),
            base_path: path.trim_end_matches('/').to_string(),
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Rewrite images first, then links. Image syntax contains link syntax,
    /// so the order keeps images from being treated as plain links.
    pub fn rewrite(&self, body: &str) -> String {
        let with_images = image_regex().replace_all(body, |caps: &Captures<'_>| {
            match self.absolutize(&caps[2]) {
                Some(target) => format!("![{}]({})", &caps[1], target),
                None => caps[0].to_string(),
            }
        });

        let rewritten = link_regex().replace_all(&with_images, |caps: &Captures<'_>| {
            let target = &caps[2];
            if target.starts_with('#') {
                return caps[0].to_string();
            }
            match self.absolutize(target) {
                Some(target) => format!("[{}]({})", &caps[1], target),
                None => caps[0].to_string(),
            }
        });

        rewritten.into_owned()
    }

    /// Absolute form of a target, or `None` when it is already absolute.
    fn absolutize(&self, target: &str) -> Option<String> {
        if target.starts_with("http://") || target.starts_with("https://") {
            return None;
        }

        let absolute = if target.starts_with('/') {
            if !self.base_path.is_empty() && target.starts_with(&self.base_path) {
                format!("{}{}", self.domain, target)
            } else {
                format!("{}{}{}", self.domain, self.base_path, target)
            }
        } else {
            format!("{}{}/{}", self.domain, self.base_path, target)
        };
        Some(absolute)
    }
}

/// Split a URL into (scheme, authority, path) without validating it.
///
/// The scheme is everything before the first `:` when that is a valid scheme
/// name; the authority follows a `//` and runs to the next `/`, `?` or `#`.
/// Query and fragment are dropped from the path. Missing parts are empty.
fn split_url(url: &str) -> (String, &str, &str) {
    let (scheme, rest) = match url.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => (scheme.to_ascii_lowercase(), rest),
        _ => (String::new(), url),
    };

    let (netloc, rest) = match rest.strip_prefix("//") {
        Some(after) => after.split_at(after.find(['/', '?', '#']).unwrap_or(after.len())),
        None => ("", rest),
    };

    let path = rest.split(['?', '#']).next().unwrap_or_default();
    (scheme, netloc, path)
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Rewrite relative links and images in `body` against `base_url`.
///
/// An empty base URL leaves the body untouched.
///
/// # Example
///
/// ```
/// use retype_llms_core::links::rewrite_links;
///
/// let body = "[see](/images/a.png)";
/// assert_eq!(
///     rewrite_links(body, "https://example.com/docs"),
///     "[see](https://example.com/docs/images/a.png)"
/// );
/// ```
pub fn rewrite_links(body: &str, base_url: &str) -> String {
    match LinkRewriter::new(base_url) {
        Some(rewriter) => rewriter.rewrite(body),
        None => body.to_string(),
    }
}
