//! Content generators for static site output.
//!
//! Generates auxiliary files from the rendered site:
//!
//! - **Feed**: RSS/Atom feed of blog posts in the default locale
//! - **Sitemap**: Search engine indexing (`sitemap.xml`)
//!
//! Both work from data already in memory (rendered pages, the content
//! registry), so no output files are re-read.

pub mod feed;
pub mod sitemap;

use std::borrow::Cow;

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}
