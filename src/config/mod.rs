//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site] [i18n] [content] [build] [serve] [theme]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config discovery, URL helpers
//! └── mod.rs         # SiteConfig (this file)
//! ```

pub mod section;
pub mod types;
mod util;

pub use util::{extract_url_path, find_config_file};

pub use section::{
    BuildSectionConfig, ContentConfig, FeedFormat, I18nConfig, ServeConfig, SiteSectionConfig,
    ThemeSectionConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory, parent of the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub i18n: I18nConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub build: BuildSectionConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub theme: ThemeSectionConfig,
}

impl SiteConfig {
    /// Load configuration for the parsed command line.
    ///
    /// For non-init commands, searches upward from cwd for the config file.
    /// The project root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'folio init' to create a new site",
                cli.config.display()
            )));
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli)?;

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let path = match &cli.command {
            Commands::Init { name: Some(name) } => cwd.join(name).join(&cli.config),
            Commands::Init { name: None } => cwd.join(&cli.config),
            _ => match find_config_file(&cli.config) {
                Some(path) => return Ok((path, true)),
                None => cwd.join(&cli.config),
            },
        };
        let exists = path.exists();
        Ok((path, exists))
    }

    /// Resolve root, normalize paths and apply CLI overrides.
    fn finalize(&mut self, cli: &Cli) -> Result<()> {
        let root = match self.config_path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => std::env::current_dir()?,
        };

        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.normalize_paths(&root);
        self.apply_command_options(cli);
        self.sync_path_prefix_from_url();

        // Local preview serves pages at / regardless of the deployment prefix
        if cli.is_serve() {
            self.build.path_prefix = PathBuf::new();
        }
        Ok(())
    }

    /// Derive `build.path_prefix` from the path component of `site.url`.
    fn sync_path_prefix_from_url(&mut self) {
        if let Some(ref url) = self.site.url
            && let Some(path) = extract_url_path(url)
            && !path.is_empty()
        {
            self.build.path_prefix = PathBuf::from(path);
        }
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    pub fn get_root(&self) -> &Path {
        &self.root
    }

    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Public URL for a site-relative path, honoring the deployment prefix.
    ///
    /// `"/en/blog/"` becomes `"/my-project/en/blog/"` when deployed under a
    /// subdirectory.
    pub fn url_for(&self, path: &str) -> String {
        let prefix = self.build.path_prefix.to_string_lossy();
        let path = path.trim_start_matches('/');
        if prefix.is_empty() {
            format!("/{path}")
        } else {
            format!("/{}/{path}", prefix.trim_matches('/'))
        }
    }

    /// Absolute URL for a site-relative path, if `site.url` is configured.
    pub fn absolute_url(&self, path: &str) -> Option<String> {
        let base = self.site.url.as_deref()?;
        let base = url::Url::parse(base).ok()?;
        let origin = base.origin().ascii_serialization();
        Some(format!("{origin}{}", self.url_for(path)))
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args, false),
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args, true);
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
                if self.site.url.is_none() {
                    self.site.url = Some(format!(
                        "http://{}:{}",
                        self.serve.interface, self.serve.port
                    ));
                }
            }
            Commands::Init { .. } | Commands::Query { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    ///
    /// `is_serve`: feed and sitemap default to disabled for local preview.
    fn apply_build_args(&mut self, args: &BuildArgs, is_serve: bool) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        self.build.clean = args.clean;

        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }

        if is_serve {
            self.build.feed.enable = args.feed.unwrap_or(false);
            self.build.sitemap.enable = args.sitemap.unwrap_or(false);
        } else {
            Self::update_option(&mut self.build.feed.enable, args.feed.as_ref());
            Self::update_option(&mut self.build.sitemap.enable, args.sitemap.as_ref());
        }
    }

    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Make every configured directory absolute against `root`.
    ///
    /// Feed and sitemap paths stay relative; they resolve against the
    /// output directory at write time.
    fn normalize_paths(&mut self, root: &Path) {
        let root = crate::utils::path::normalize_path(root);
        let join = |p: &Path| crate::utils::path::normalize_path(&root.join(p));

        self.config_path = crate::utils::path::normalize_path(&self.config_path);
        self.i18n.messages = join(&self.i18n.messages);
        self.content.registry = join(&self.content.registry);
        self.content.static_dir = join(&self.content.static_dir);
        self.build.output = join(&self.build.output);
        self.set_root(&root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(self.build.feed.enable, &mut diag);
        self.i18n.validate(&mut diag);
        self.build.validate(self.get_root(), &mut diag);

        if self.build.sitemap.enable && self.site.url.is_none() {
            diag.warn(
                SiteSectionConfig::URL,
                "not set, sitemap will be skipped",
            );
        }

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` table; extra text continues that table.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
