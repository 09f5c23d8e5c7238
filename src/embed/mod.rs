//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `build` - Build-time templates (redirect.html)
//! - `site` - Stylesheet, page script and the inline theme bootstrap
//! - `init` - Starter files written by `folio init`
//!
//! # Usage
//!
//! ```ignore
//! use embed::build::{REDIRECT_HTML, RedirectVars};
//!
//! let html = REDIRECT_HTML.render(&RedirectVars { canonical_url: "/en/" });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod build {
    use super::{Template, TemplateVars};

    /// Variables for redirect.html template.
    pub struct RedirectVars<'a> {
        pub canonical_url: &'a str,
    }

    impl TemplateVars for RedirectVars<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace("__CANONICAL_URL__", self.canonical_url)
        }
    }

    /// Redirect page written at the site root.
    pub const REDIRECT_HTML: Template<RedirectVars<'static>> =
        Template::new(include_str!("build/redirect.html"));
}

pub mod site {
    use super::{Template, TemplateVars};
    use crate::render::state::{CAROUSEL_INTERVAL_MS, ThemeMode};

    /// Site-relative URL of the stylesheet.
    pub const STYLESHEET_PATH: &str = "/assets/folio.css";
    /// Site-relative URL of the page script.
    pub const SCRIPT_PATH: &str = "/assets/folio.js";

    pub const SITE_CSS: &str = include_str!("site/folio.css");

    /// Variables for folio.js and the inline theme bootstrap.
    pub struct ThemeInitVars {
        pub storage_key: &'static str,
        pub carousel_interval: u32,
    }

    impl Default for ThemeInitVars {
        fn default() -> Self {
            Self {
                storage_key: ThemeMode::STORAGE_KEY,
                carousel_interval: CAROUSEL_INTERVAL_MS,
            }
        }
    }

    impl TemplateVars for ThemeInitVars {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__STORAGE_KEY__", self.storage_key)
                .replace("__CAROUSEL_INTERVAL__", &self.carousel_interval.to_string())
        }
    }

    /// Runs before first paint so the stored theme wins over the rendered default.
    pub const THEME_INIT_JS: Template<ThemeInitVars> =
        Template::new(include_str!("site/theme-init.js"));

    /// Menu, theme toggle, carousel, dialogs, blog search, contact form.
    pub const SITE_JS: Template<ThemeInitVars> = Template::new(include_str!("site/folio.js"));
}

pub mod init {
    use super::{Template, TemplateVars};

    /// Variables for the starter `folio.toml`.
    pub struct InitVars<'a> {
        pub title: &'a str,
    }

    impl TemplateVars for InitVars<'_> {
        fn apply(&self, content: &str) -> String {
            let title = self.title.replace('\\', "\\\\").replace('"', "\\\"");
            content.replace("__TITLE__", &title)
        }
    }

    /// `folio.toml` for a new site.
    pub const FOLIO_TOML: Template<InitVars<'static>> =
        Template::new(include_str!("init/folio.toml"));
    /// `content.toml` with one post and one project.
    pub const CONTENT_TOML: &str = include_str!("init/content.toml");
    pub const EN_JSON: &str = include_str!("init/en.json");
    pub const AR_JSON: &str = include_str!("init/ar.json");
}

// =============================================================================
// Embedded Assets Writer
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;

/// Write the stylesheet and page script under `output_dir`.
pub fn write_embedded_assets(output_dir: &Path) -> Result<()> {
    let assets = [
        (site::STYLESHEET_PATH, site::SITE_CSS.to_string()),
        (
            site::SCRIPT_PATH,
            site::SITE_JS.render(&site::ThemeInitVars::default()),
        ),
    ];
    for (url, content) in assets {
        let path = output_dir.join(url.trim_start_matches('/'));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_template() {
        let vars = build::RedirectVars {
            canonical_url: "/en/",
        };
        let html = build::REDIRECT_HTML.render(&vars);
        assert!(html.contains("/en/"));
        assert!(html.contains("canonical"));
        assert!(!html.contains("__CANONICAL_URL__"));
    }

    #[test]
    fn test_theme_init_vars() {
        let js = site::THEME_INIT_JS.render(&site::ThemeInitVars::default());
        assert!(js.contains("\"theme\""));
        assert!(!js.contains("__STORAGE_KEY__"));

        let js = site::SITE_JS.render(&site::ThemeInitVars::default());
        assert!(js.contains("4000"));
        assert!(!js.contains("__CAROUSEL_INTERVAL__"));
    }

    #[test]
    fn test_write_embedded_assets() {
        let dir = tempfile::tempdir().unwrap();
        write_embedded_assets(dir.path()).unwrap();
        assert!(dir.path().join("assets/folio.css").is_file());
        let js = std::fs::read_to_string(dir.path().join("assets/folio.js")).unwrap();
        assert!(js.contains("localStorage"));
    }

    #[test]
    fn test_init_files_parse() {
        let config = init::FOLIO_TOML.render(&init::InitVars {
            title: "Sara \"the dev\"",
        });
        let value = toml::from_str::<toml::Value>(&config).unwrap();
        assert_eq!(value["site"]["title"].as_str(), Some("Sara \"the dev\""));
        crate::content::ContentRegistry::from_str(init::CONTENT_TOML).unwrap();
        serde_json::from_str::<serde_json::Value>(init::EN_JSON).unwrap();
        serde_json::from_str::<serde_json::Value>(init::AR_JSON).unwrap();
    }
}
