//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! output = "dist"             # Output directory (relative to site root)
//! minify = true               # Minify HTML and XML output
//!
//! [build.feed]
//! enable = true               # Generate an RSS/Atom feed of blog posts
//! format = "rss"              # rss | atom
//! path = "feed.xml"
//!
//! [build.sitemap]
//! enable = true
//! path = "sitemap.xml"
//! ```

mod feed;
mod sitemap;

pub use feed::{FeedConfig, FeedFormat};
pub use sitemap::SitemapConfig;

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// URL path prefix for subdirectory deployment, derived from `site.url`.
    #[serde(skip)]
    pub path_prefix: PathBuf,

    pub output: PathBuf,

    pub minify: bool,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,

    pub feed: FeedConfig,

    pub sitemap: SitemapConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            path_prefix: PathBuf::new(),
            output: "dist".into(),
            minify: false,
            clean: false,
            feed: FeedConfig::default(),
            sitemap: SitemapConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");

    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error(Self::OUTPUT, "output directory must not be empty");
        } else if self.output == root {
            diag.error_with_hint(
                Self::OUTPUT,
                "output directory is the site root",
                "use a subdirectory such as \"dist\"",
            );
        }
        self.feed.validate(diag);
        self.sitemap.validate(diag);
    }
}

/// Output files must stay inside the output directory.
fn is_relative_file(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path.is_relative()
        && path
            .components()
            .all(|c| matches!(c, std::path::Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_build_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
        assert!(config.build.sitemap.enable);
    }

    #[test]
    fn test_output_is_root() {
        let mut config = test_parse_config("");
        config.build.output = PathBuf::from("/site");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(Path::new("/site"), &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_is_relative_file() {
        assert!(is_relative_file(Path::new("feed.xml")));
        assert!(is_relative_file(Path::new("feeds/blog.xml")));
        assert!(!is_relative_file(Path::new("../feed.xml")));
        assert!(!is_relative_file(Path::new("/feed.xml")));
        assert!(!is_relative_file(Path::new("")));
    }
}
