//! Feed generation (RSS, Atom).
//!
//! Syndicates the blog posts of the default locale:
//!
//! - **RSS 2.0**: Standard feed format
//! - **Atom 1.0**: Modern feed format
//!
//! The output path is `[build.feed] path` under the output directory.

use crate::{
    config::{FeedFormat, SiteConfig},
    generator::minify_xml,
    log,
    render::Site,
};
use anyhow::{Context, Result};
use std::fs;

pub mod atom;
mod common;
pub mod rss;

pub use common::FeedPost;

/// Build feed if enabled in config (RSS or Atom based on format setting).
pub fn build_feed(site: &Site) -> Result<()> {
    let config = &site.config;
    if !config.build.feed.enable {
        return Ok(());
    }
    let posts = common::feed_posts(site);
    let xml = match config.build.feed.format {
        FeedFormat::Rss => rss::to_xml(config, site.routing.default_locale(), &posts)?,
        FeedFormat::Atom => atom::to_xml(config, site.routing.default_locale(), &posts)?,
    };
    write_feed(config, &xml)
}

fn write_feed(config: &SiteConfig, xml: &str) -> Result<()> {
    let xml = minify_xml(xml.as_bytes(), config.build.minify);
    let feed_path = config.build.output.join(&config.build.feed.path);

    if let Some(parent) = feed_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&feed_path, &*xml)
        .with_context(|| format!("Failed to write feed to {}", feed_path.display()))?;

    let module = match config.build.feed.format {
        FeedFormat::Rss => "rss",
        FeedFormat::Atom => "atom",
    };
    log!(module; "{}", feed_path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}
