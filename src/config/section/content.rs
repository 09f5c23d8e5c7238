//! `[content]` section configuration.
//!
//! ```toml
//! [content]
//! registry = "content.toml"   # blog posts and projects
//! static = "public"           # copied verbatim into the output
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub registry: PathBuf,
    #[serde(rename = "static")]
    pub static_dir: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            registry: "content.toml".into(),
            static_dir: "public".into(),
        }
    }
}
