//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! title = "Ahmed Ali"
//! author = "Ahmed Ali"
//! email = "ahmed@example.com"
//! description = "Frontend developer and writer"
//! url = "https://example.com"    # required when [build.feed] is enabled
//! avatar = "/avatar.jpg"          # hero portrait
//! resume = "/resume.pdf"          # hero download button
//! github = "https://github.com/ahmed"
//! linkedin = "https://linkedin.com/in/ahmed"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    pub title: String,
    pub author: String,
    pub email: String,
    pub description: String,
    /// Absolute site URL; its path component becomes the link prefix.
    pub url: Option<String>,
    pub avatar: Option<String>,
    pub resume: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl SiteSectionConfig {
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Validate site metadata.
    ///
    /// # Checks
    /// - If `feed_enabled`, `url` must be set
    /// - `url` must be an http(s) URL with a host
    pub fn validate(&self, feed_enabled: bool, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.warn(Self::TITLE, "site title is empty");
        }

        if feed_enabled && self.url.is_none() {
            diag.error_with_hint(
                Self::URL,
                format!(
                    "{} is enabled but {} is not configured",
                    super::FeedConfig::ENABLE,
                    Self::URL
                ),
                format!("set {}, e.g.: \"https://example.com\"", Self::URL),
            );
        }

        let Some(url_str) = &self.url else {
            return;
        };
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => diag.error_with_hint(
                Self::URL,
                format!("invalid URL: {e}"),
                "use format like https://example.com",
            ),
        }
    }
}
