//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Extract the path component of a URL, without surrounding slashes.
///
/// Returns `None` if the URL is invalid.
///
/// ```ignore
/// extract_url_path("https://example.github.io/portfolio/") -> Some("portfolio")
/// extract_url_path("https://example.com")                  -> Some("")
/// extract_url_path("invalid")                              -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Find the config file by walking up from the current directory.
///
/// ```text
/// /home/user/site/messages/   ← cwd
/// /home/user/site/folio.toml  ← found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}
