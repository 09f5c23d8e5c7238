//! Feed (RSS/Atom) generation configuration.

use super::is_relative_file;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub enable: bool,
    pub path: PathBuf,
    pub format: FeedFormat,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: "feed.xml".into(),
            format: FeedFormat::Rss,
        }
    }
}

impl FeedConfig {
    pub const ENABLE: FieldPath = FieldPath::new("build.feed.enable");
    pub const PATH: FieldPath = FieldPath::new("build.feed.path");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable && !is_relative_file(&self.path) {
            diag.error_with_hint(
                Self::PATH,
                format!("`{}` must be a relative file path", self.path.display()),
                "e.g. \"feed.xml\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(!config.build.feed.enable);
        assert_eq!(config.build.feed.path, PathBuf::from("feed.xml"));
        assert_eq!(config.build.feed.format, FeedFormat::Rss);
    }

    #[test]
    fn test_custom_config() {
        let config =
            test_parse_config("[build.feed]\nenable = true\npath = \"atom.xml\"\nformat = \"atom\"");
        assert!(config.build.feed.enable);
        assert_eq!(config.build.feed.path, PathBuf::from("atom.xml"));
        assert_eq!(config.build.feed.format, FeedFormat::Atom);
    }

    #[test]
    fn test_escaping_path_rejected() {
        let config = test_parse_config("[build.feed]\nenable = true\npath = \"../feed.xml\"");
        let mut diag = ConfigDiagnostics::new();
        config.build.feed.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
