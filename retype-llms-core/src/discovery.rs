//! Discovery of markdown sources under the input directory.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into.
pub const EXCLUDED_DIRS: &[&str] = &["static", "node_modules", ".git"];

/// Find all `.md` files below `input_dir`, sorted by their path string.
///
/// Entries that cannot be read while walking are logged and skipped.
pub fn discover_documents(input_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(input_dir)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| !e.file_type().is_dir() && e.file_name().to_string_lossy().ends_with(".md"))
        .map(DirEntry::into_path)
        .collect();

    files.sort_by_cached_key(|p| p.to_string_lossy().into_owned());
    files
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    let excluded = entry.depth() > 0
        && entry.file_type().is_dir()
        && EXCLUDED_DIRS
            .iter()
            .any(|name| entry.file_name() == OsStr::new(name));
    if excluded {
        tracing::debug!("Ignoring directory {:?}", entry.path());
    }
    excluded
}
