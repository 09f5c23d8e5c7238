//! Path and link helpers.
//!
//! - `normalize_path` - absolute filesystem paths (canonicalize + fallback)
//! - `page_file` - output file for a page URL
//! - `is_external_link` - links that leave the site

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`), falling back
/// to the path as-is when absolute or joined with cwd when relative.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Map a page URL to its file under `output`.
///
/// ```text
/// /en/blog/       → output/en/blog/index.html
/// /404.html       → output/404.html
/// /               → output/index.html
/// ```
pub fn page_file(output: &Path, url: &str) -> PathBuf {
    let rel = url.trim_matches('/');
    if rel.is_empty() {
        return output.join("index.html");
    }
    let path = output.join(rel);
    if rel.ends_with(".html") {
        path
    } else {
        path.join("index.html")
    }
}

/// Check if a link is external (has a URL scheme like `https:` or `mailto:`).
///
/// A valid scheme has at least one character before the colon and only
/// contains ASCII alphanumerics or `+`, `-`, `.`.
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
