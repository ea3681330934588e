//! Route and title resolution for documents.
//!
//! A route is the canonical URL path of a document (`/guide/setup/`). It is
//! either declared in front matter (`permalink`, then `route`) or derived
//! from the file's location under the input directory.

use crate::models::Frontmatter;
use crate::slug::{slugify, title_from_slug};
use regex::Regex;
use std::path::{Component, Path};
use std::sync::OnceLock;

/// File stems that make a file the landing page of its directory.
const DEFAULT_INDEX_NAMES: &[&str] = &["index", "readme", "welcome", "default", "home"];

static SLASH_RUN_REGEX: OnceLock<Regex> = OnceLock::new();

fn slash_run_regex() -> &'static Regex {
    SLASH_RUN_REGEX.get_or_init(|| Regex::new(r"/+").unwrap())
}

/// Resolve the route for a document.
///
/// # Examples
///
/// ```
/// use retype_llms_core::models::Frontmatter;
/// use retype_llms_core::route::resolve_route;
/// use std::path::Path;
///
/// let fm = Frontmatter::default();
/// assert_eq!(resolve_route(Path::new("docs/guide/index.md"), Path::new("docs"), &fm), "/guide/");
/// assert_eq!(resolve_route(Path::new("docs/guide/setup.md"), Path::new("docs"), &fm), "/guide/setup/");
/// ```
pub fn resolve_route(path: &Path, input_dir: &Path, frontmatter: &Frontmatter) -> String {
    if let Some(permalink) = frontmatter.permalink() {
        tracing::debug!("{:?} uses permalink {}", path, permalink);
        return permalink;
    }
    if let Some(route) = frontmatter.route() {
        tracing::debug!("{:?} uses route {}", path, route);
        return route;
    }
    derive_route(path, input_dir)
}

/// Derive a route purely from where the file sits under `input_dir`.
pub fn derive_route(path: &Path, input_dir: &Path) -> String {
    let rel_path = path.strip_prefix(input_dir).unwrap_or(path);

    let mut segments: Vec<String> = rel_path
        .parent()
        .map(|parent| parent.components().filter_map(slug_component).collect())
        .unwrap_or_default();

    let stem = file_stem(path);
    if !is_default_index(path, &stem) {
        segments.push(slugify(&stem));
    }

    let route = format!("/{}/", segments.join("/"));
    slash_run_regex().replace_all(&route, "/").into_owned()
}

/// Resolve the display title for a document: front-matter `title`, else the
/// title-cased slug of the file name.
pub fn resolve_title(path: &Path, frontmatter: &Frontmatter) -> String {
    frontmatter
        .title()
        .unwrap_or_else(|| title_from_slug(&slugify(&file_stem(path))))
}

fn slug_component(component: Component<'_>) -> Option<String> {
    match component {
        Component::CurDir => None,
        other => Some(slugify(&other.as_os_str().to_string_lossy())),
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// A file is its directory's landing page when its stem is one of the
/// well-known index names or matches the directory's own name.
fn is_default_index(path: &Path, stem: &str) -> bool {
    let stem = stem.to_lowercase();
    if DEFAULT_INDEX_NAMES.contains(&stem.as_str()) {
        return true;
    }
    path.parent()
        .and_then(Path::file_name)
        .is_some_and(|dir| dir.to_string_lossy().to_lowercase() == stem)
}
