//! Site initialization.
//!
//! Writes a starter site: `folio.toml`, a content registry with one post
//! and one project, `en`/`ar` catalogs and an empty static directory.

use crate::{
    config::SiteConfig,
    embed::init::{AR_JSON, CONTENT_TOML, EN_JSON, FOLIO_TOML, InitVars},
    log,
};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Where `folio init` creates the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `folio init`: current directory, must not already hold a site
    CurrentDir,
    /// `folio init <name>`: new subdirectory, must not exist
    NewDir,
}

/// Create a new site at the config's root.
pub fn new_site(config: &SiteConfig, mode: InitMode) -> Result<()> {
    let root = config.get_root();
    validate_target(root, &config.config_path, mode)?;

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create '{}'", root.display()))?;

    let title = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Portfolio".to_string());

    let messages = &config.i18n.messages;
    let files = [
        (config.config_path.clone(), FOLIO_TOML.render(&InitVars { title: &title })),
        (config.content.registry.clone(), CONTENT_TOML.to_string()),
        (messages.join("en.json"), EN_JSON.to_string()),
        (messages.join("ar.json"), AR_JSON.to_string()),
    ];
    for (path, content) in &files {
        write_new(path, content)?;
    }

    fs::create_dir_all(&config.content.static_dir).with_context(|| {
        format!("Failed to create '{}'", config.content.static_dir.display())
    })?;
    write_ignore_file(root, &config.root_relative(&config.build.output))?;

    log!("init"; "site initialized at {}", root.display());
    Ok(())
}

/// Check the target before writing anything.
fn validate_target(root: &Path, config_path: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir if config_path.exists() => bail!(
            "'{}' already exists.\n\
             Use `folio init <name>` to create a site in a new subdirectory.",
            config_path.display()
        ),
        InitMode::NewDir if root.exists() => bail!(
            "Directory '{}' already exists.\n\
             Choose a different name or remove the existing directory.",
            root.display()
        ),
        _ => Ok(()),
    }
}

/// Write `content` to `path`, keeping any file the user already has.
fn write_new(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        log!("init"; "keeping existing {}", path.display());
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}

fn write_ignore_file(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let content = format!("{}\n.DS_Store\n", output_pattern.display());
    write_new(&root.join(".gitignore"), &content)
}
