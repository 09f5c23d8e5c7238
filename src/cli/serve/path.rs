//! Request URL handling: query splitting and filesystem resolution.

use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

/// Split a request URL into its decoded path and raw query string.
pub fn split_url(url: &str) -> (String, Option<&str>) {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };
    let path = percent_decode_str(path)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();
    (path, query)
}

/// Value of `key` in a query string, form-decoded.
pub fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Resolve a decoded URL path to a file under `serve_root`, handling
/// `index.html` for directories.
pub fn resolve_path(path: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = path.trim_matches('/');

    // Reject paths with suspicious patterns early
    if clean.contains("..") {
        return None;
    }

    // Canonicalize to resolve symlinks and verify path is under serve_root
    let canonical = serve_root.join(clean).canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;
    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    if canonical.is_file() {
        return Some(canonical);
    }

    let index = canonical.join("index.html");
    index.is_file().then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_split_url() {
        assert_eq!(split_url("/en/blog/?q=rust"), ("/en/blog/".into(), Some("q=rust")));
        assert_eq!(split_url("/ar/%D9%85/"), ("/ar/م/".into(), None));
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param(Some("q=binary+basics&x=1"), "q").as_deref(), Some("binary basics"));
        assert_eq!(query_param(Some("x=1"), "q"), None);
        assert_eq!(query_param(None, "q"), None);
    }

    #[test]
    fn test_resolve_path() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("en/blog")).unwrap();
        fs::write(root.join("en/blog/index.html"), "blog").unwrap();
        fs::write(root.join("404.html"), "missing").unwrap();

        let index = resolve_path("/en/blog/", root).unwrap();
        assert!(index.ends_with("en/blog/index.html"));
        assert!(resolve_path("/404.html", root).is_some());
        assert!(resolve_path("/en/projects/", root).is_none());
        assert!(resolve_path("/../etc/passwd", root).is_none());
    }
}
