//! Site building orchestration.
//!
//! Build phases:
//! - **Init** - Prepare (and optionally clean) the output directory
//! - **Load** - Catalogs and content registry
//! - **Render** - Every page of every locale, in parallel
//! - **Write** - Pages and static files, in parallel
//! - **Generate** - Embedded assets, sitemap and feed

use crate::{
    config::SiteConfig,
    core::is_shutdown,
    embed,
    generator::{feed, minify_xml, sitemap},
    log,
    logger::ProgressLine,
    render::{self, RenderedPage, Site},
    utils::{path::page_file, plural_count},
};
use anyhow::{Context, Result, anyhow};
use jwalk::WalkDir;
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// File names never copied from the static directory.
const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Progress counter for static files.
const STATIC_COUNTER: &str = "static";

/// Build the entire site, returning the loaded site for reuse by `serve`.
pub fn build_site(config: SiteConfig, quiet: bool) -> Result<Site> {
    init_output(&config.build.output, config.build.clean)?;

    let site = Site::load(config)?;
    let config = &site.config;

    let pages = render::render_all(&site);
    let statics = collect_all_files(&config.content.static_dir);
    let progress = create_progress(&site, &pages, statics.len(), quiet);

    let (pages_result, statics_result) = rayon::join(
        || write_pages(config, &pages, progress.as_ref()),
        || copy_static_files(config, &statics, progress.as_ref()),
    );
    if let Some(p) = progress {
        p.finish();
    }
    pages_result?;
    statics_result?;

    embed::write_embedded_assets(&config.build.output)?;

    let (sitemap_result, feed_result) = rayon::join(
        || sitemap::build_sitemap(config, &site.routing, &pages),
        || feed::build_feed(&site),
    );
    sitemap_result?;
    feed_result?;

    if !quiet {
        log!(
            "build";
            "{} in {}, {}",
            plural_count(pages.len(), "page"),
            plural_count(site.routing.locales().len(), "locale"),
            plural_count(statics.len(), "static file")
        );
    }
    Ok(site)
}

/// Create the output directory, removing it first when `clean` is set.
fn init_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// All regular files under `dir`; a missing directory yields none.
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect()
}

/// One counter per locale plus one for static files.
fn create_progress(
    site: &Site,
    pages: &[RenderedPage],
    static_count: usize,
    quiet: bool,
) -> Option<ProgressLine> {
    if quiet {
        return None;
    }
    let mut counters: Vec<(String, usize)> = site
        .routing
        .locales()
        .iter()
        .map(|locale| {
            let count = pages
                .iter()
                .filter(|p| p.locale.as_deref() == Some(locale.as_str()))
                .count();
            (locale.clone(), count)
        })
        .collect();
    counters.push((STATIC_COUNTER.to_string(), static_count));
    Some(ProgressLine::new(&counters))
}

/// Write rendered pages in parallel.
fn write_pages(
    config: &SiteConfig,
    pages: &[RenderedPage],
    progress: Option<&ProgressLine>,
) -> Result<()> {
    pages.par_iter().try_for_each(|page| {
        if is_shutdown() {
            return Err(anyhow!("Aborted"));
        }
        let path = page_file(&config.build.output, &page.url);
        write_file(&path, &minify_xml(page.html.as_bytes(), config.build.minify))?;
        if let (Some(p), Some(locale)) = (progress, &page.locale) {
            p.inc(locale);
        }
        Ok(())
    })
}

/// Copy the static directory into the output root.
fn copy_static_files(
    config: &SiteConfig,
    files: &[PathBuf],
    progress: Option<&ProgressLine>,
) -> Result<()> {
    let source = &config.content.static_dir;
    files.par_iter().try_for_each(|file| {
        if is_shutdown() {
            return Err(anyhow!("Aborted"));
        }
        let relative = file.strip_prefix(source).unwrap_or(file);
        let dest = config.build.output.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(file, &dest)
            .with_context(|| format!("Failed to copy {} to {}", file.display(), dest.display()))?;
        if let Some(p) = progress {
            p.inc(STATIC_COUNTER);
        }
        Ok(())
    })
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
