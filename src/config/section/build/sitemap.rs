//! Sitemap generation configuration.

use super::is_relative_file;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    pub enable: bool,
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}

impl SitemapConfig {
    pub const PATH: FieldPath = FieldPath::new("build.sitemap.path");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable && !is_relative_file(&self.path) {
            diag.error(
                Self::PATH,
                format!("`{}` must be a relative file path", self.path.display()),
            );
        }
    }
}
