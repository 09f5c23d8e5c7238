//! Sitemap generation.
//!
//! Lists every localized page for search engine indexing. The root redirect
//! and the 404 page are left out, and each entry links its translations.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://example.com/en/blog/binary-basics/</loc>
//!     <lastmod>2025-10-13</lastmod>
//!     <xhtml:link rel="alternate" hreflang="ar" href="https://example.com/ar/blog/binary-basics/"/>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig, generator::minify_xml, i18n::LocaleRouting, log,
    render::{RenderedPage, pages::not_found::NOT_FOUND_URL},
    utils::{html::escape_attr, plural_count},
};
use anyhow::{Context, Result};
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Build sitemap if enabled and the site has a public URL.
pub fn build_sitemap(
    config: &SiteConfig,
    routing: &LocaleRouting,
    pages: &[RenderedPage],
) -> Result<()> {
    if !config.build.sitemap.enable || config.site.url.is_none() {
        return Ok(());
    }
    Sitemap::build(config, routing, pages).write(config)
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
    /// `(hreflang, href)` of the same page in other locales.
    alternates: Vec<(String, String)>,
}

impl Sitemap {
    fn build(config: &SiteConfig, routing: &LocaleRouting, pages: &[RenderedPage]) -> Self {
        let published = |url: &str| pages.iter().any(|page| page.url == url);

        let urls = pages
            .iter()
            .filter(|page| page.url != NOT_FOUND_URL)
            .filter_map(|page| {
                let locale = page.locale.as_deref()?;
                let loc = config.absolute_url(&page.url)?;
                let alternates = routing
                    .locales()
                    .iter()
                    .filter(|other| other.as_str() != locale)
                    .filter_map(|other| {
                        let path = routing.switch_path(&page.url, other);
                        if !published(&path) {
                            return None;
                        }
                        Some((other.clone(), config.absolute_url(&path)?))
                    })
                    .collect();
                Some(UrlEntry {
                    loc,
                    lastmod: page.lastmod.map(|date| date.to_string()),
                    alternates,
                })
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\" xmlns:xhtml=\"");
        xml.push_str(XHTML_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_attr(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            for (lang, href) in entry.alternates {
                xml.push_str("    <xhtml:link rel=\"alternate\" hreflang=\"");
                xml.push_str(&escape_attr(&lang));
                xml.push_str("\" href=\"");
                xml.push_str(&escape_attr(&href));
                xml.push_str("\"/>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(&config.build.sitemap.path);
        let count = self.urls.len();
        let xml = self.into_xml();
        let xml = minify_xml(xml.as_bytes(), config.build.minify);

        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!(
            "sitemap";
            "{} ({})",
            sitemap_path.file_name().unwrap_or_default().to_string_lossy(),
            plural_count(count, "url")
        );
        Ok(())
    }
}
