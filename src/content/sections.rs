//! Section resolution for blog post bodies.
//!
//! A post body is not stored as a document. It is assembled from catalog
//! keys under `BlogPosts.{content_key}.content`, driven by an ordered table
//! of section descriptors:
//!
//! ```text
//! {content_key}.content.{section}.title        required, else the section is skipped
//! {content_key}.content.{section}.text         optional, "" when missing
//! {content_key}.content.{section}.{subsection} optional, dropped when missing
//! ```
//!
//! Only `Present` probes reach the output. The result is an order-preserving
//! subsequence of the table; the catalog's own key order is irrelevant.

use super::blog::POSTS_NAMESPACE;
use crate::i18n::{Catalog, Probe, Prober};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// One entry of a section table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    pub key: String,
    #[serde(default)]
    pub subsections: Vec<String>,
}

impl SectionDescriptor {
    pub fn new(key: &str, subsections: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            subsections: subsections.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

static DEFAULT_SECTIONS: LazyLock<Vec<SectionDescriptor>> = LazyLock::new(|| {
    vec![
        SectionDescriptor::new("whyBinaryMatters", &["example"]),
        SectionDescriptor::new("binaryInRam", &["memoryExample"]),
        SectionDescriptor::new("encodingTextColors", &["unicodeDetails"]),
        SectionDescriptor::new("practicalExample", &["imageProcessing", "realWorldUse"]),
        SectionDescriptor::new("bitwiseOperations", &[]),
        SectionDescriptor::new("conclusion", &[]),
    ]
});

/// Table used for posts that do not declare their own `sections`.
pub fn default_sections() -> &'static [SectionDescriptor] {
    &DEFAULT_SECTIONS
}

/// A resolved subsection: its key and translated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subsection {
    pub key: String,
    pub content: String,
}

/// A section ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSection {
    pub key: String,
    pub title: String,
    /// Empty for title-only or subsection-only sections.
    pub text: String,
    pub subsections: Vec<Subsection>,
    /// Set on the section produced by the last table entry.
    pub conclusion: bool,
}

/// Resolves post sections against one locale's catalog.
#[derive(Debug, Clone, Copy)]
pub struct SectionResolver<'a> {
    prober: Prober<'a>,
}

impl<'a> SectionResolver<'a> {
    pub fn new(catalog: &'a Catalog, echo_guard: bool) -> Self {
        Self {
            prober: Prober::new(catalog.namespace(POSTS_NAMESPACE), echo_guard),
        }
    }

    /// Whether the post has any content in this catalog (its title resolves).
    pub fn content_exists(&self, content_key: &str) -> bool {
        self.prober
            .probe(&format!("{content_key}.title"))
            .is_present()
    }

    /// Optional introduction paragraph shown above the sections.
    pub fn intro(&self, content_key: &str) -> Option<String> {
        self.prober
            .probe(&format!("{content_key}.content.intro"))
            .into_text()
    }

    /// Resolve `table` in order, keeping only sections whose title is present.
    pub fn resolve(&self, content_key: &str, table: &[SectionDescriptor]) -> Vec<ResolvedSection> {
        let last = table.len().saturating_sub(1);
        table
            .iter()
            .enumerate()
            .filter_map(|(index, descriptor)| {
                self.resolve_one(content_key, descriptor, index == last)
            })
            .collect()
    }

    fn resolve_one(
        &self,
        content_key: &str,
        descriptor: &SectionDescriptor,
        conclusion: bool,
    ) -> Option<ResolvedSection> {
        let base = format!("{content_key}.content.{}", descriptor.key);

        let Probe::Present(title) = self.prober.probe(&format!("{base}.title")) else {
            return None;
        };

        let text = self
            .prober
            .probe(&format!("{base}.text"))
            .into_text()
            .unwrap_or_default();

        let subsections = descriptor
            .subsections
            .iter()
            .filter_map(|key| {
                self.prober
                    .probe(&format!("{base}.{key}"))
                    .into_text()
                    .map(|content| Subsection {
                        key: key.clone(),
                        content,
                    })
            })
            .collect();

        Some(ResolvedSection {
            key: descriptor.key.clone(),
            title,
            text,
            subsections,
            conclusion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn catalog(content: Value) -> Catalog {
        Catalog::from_value(
            "en",
            json!({ "BlogPosts": { "x": { "title": "Post X", "content": content } } }),
        )
        .unwrap()
    }

    fn full_content() -> Value {
        json!({
            "intro": "Computers think in ones and zeros.",
            "whyBinaryMatters": {
                "title": "Why Binary Matters",
                "text": "Every value is bits.",
                "example": "5 is 101"
            },
            "binaryInRam": {
                "title": "Binary in RAM",
                "text": "Bytes are 8 bits.",
                "memoryExample": "0x41 is 'A'"
            },
            "encodingTextColors": {
                "title": "Encoding Text and Colors",
                "text": "UTF-8 and RGB.",
                "unicodeDetails": "U+0041"
            },
            "practicalExample": {
                "title": "Practical Example",
                "text": "Thresholding an image.",
                "imageProcessing": "Pixels as bytes",
                "realWorldUse": "Compression"
            },
            "bitwiseOperations": {
                "title": "Bitwise Operations",
                "text": "AND, OR, XOR."
            },
            "conclusion": {
                "title": "Conclusion",
                "text": "Binary is everywhere."
            }
        })
    }

    fn keys(sections: &[ResolvedSection]) -> Vec<&str> {
        sections.iter().map(|s| s.key.as_str()).collect()
    }

    #[test]
    fn test_full_content_first_section() {
        let catalog = catalog(full_content());
        let sections = SectionResolver::new(&catalog, true).resolve("x", default_sections());

        assert_eq!(sections.len(), 6);
        assert_eq!(
            sections[0],
            ResolvedSection {
                key: "whyBinaryMatters".into(),
                title: "Why Binary Matters".into(),
                text: "Every value is bits.".into(),
                subsections: vec![Subsection {
                    key: "example".into(),
                    content: "5 is 101".into(),
                }],
                conclusion: false,
            }
        );
        assert_eq!(sections[3].subsections.len(), 2);
        assert!(sections[5].conclusion);
        assert_eq!(sections.iter().filter(|s| s.conclusion).count(), 1);
    }

    #[test]
    fn test_title_only_section_when_text_fails() {
        let mut content = full_content();
        content["bitwiseOperations"]["text"] = json!({ "not": "a string" });
        let catalog = catalog(content);

        let sections = SectionResolver::new(&catalog, true).resolve("x", default_sections());
        let bitwise = sections.iter().find(|s| s.key == "bitwiseOperations").unwrap();
        assert_eq!(bitwise.title, "Bitwise Operations");
        assert_eq!(bitwise.text, "");
        assert!(bitwise.subsections.is_empty());
    }

    #[test]
    fn test_fully_missing_section_skipped() {
        let mut content = full_content();
        content.as_object_mut().unwrap().remove("practicalExample");
        let catalog = catalog(content);

        let sections = SectionResolver::new(&catalog, true).resolve("x", default_sections());
        assert_eq!(
            keys(&sections),
            [
                "whyBinaryMatters",
                "binaryInRam",
                "encodingTextColors",
                "bitwiseOperations",
                "conclusion"
            ]
        );
        assert!(
            sections
                .iter()
                .flat_map(|s| &s.subsections)
                .all(|sub| sub.key != "imageProcessing" && sub.key != "realWorldUse")
        );
    }

    #[test]
    fn test_echoed_title_excludes_subsections() {
        let mut content = full_content();
        content["practicalExample"]["title"] = json!("x.content.practicalExample.title");
        let catalog = catalog(content);

        let sections = SectionResolver::new(&catalog, true).resolve("x", default_sections());
        assert!(!keys(&sections).contains(&"practicalExample"));
    }

    #[test]
    fn test_subsection_inclusion_per_probe() {
        let mut content = full_content();
        content["practicalExample"]["imageProcessing"] = json!("");
        content["practicalExample"]["realWorldUse"] = json!("BlogPosts.x.content.practicalExample.realWorldUse");
        content["whyBinaryMatters"].as_object_mut().unwrap().remove("example");
        let catalog = catalog(content);

        let sections = SectionResolver::new(&catalog, true).resolve("x", default_sections());
        let practical = sections.iter().find(|s| s.key == "practicalExample").unwrap();
        assert!(practical.subsections.is_empty());
        assert!(sections[0].subsections.is_empty());
        assert_eq!(sections[0].text, "Every value is bits.");
    }

    #[test]
    fn test_echoed_text_becomes_empty() {
        let mut content = full_content();
        content["binaryInRam"]["text"] = json!("BlogPosts.x.content.binaryInRam.text");
        let catalog = catalog(content);

        let sections = SectionResolver::new(&catalog, true).resolve("x", default_sections());
        assert_eq!(sections[1].key, "binaryInRam");
        assert_eq!(sections[1].text, "");
        assert_eq!(sections[1].subsections.len(), 1);
    }

    #[test]
    fn test_order_follows_table_not_catalog() {
        let catalog = catalog(json!({
            "conclusion": { "title": "End" },
            "whyBinaryMatters": { "title": "Start" },
            "unknownSection": { "title": "Never probed" }
        }));

        let sections = SectionResolver::new(&catalog, true).resolve("x", default_sections());
        assert_eq!(keys(&sections), ["whyBinaryMatters", "conclusion"]);
    }

    #[test]
    fn test_custom_table_last_entry_is_conclusion() {
        let catalog = catalog(json!({
            "setup": { "title": "Setup", "text": "Install", "tip": "Use rustup" },
            "wrapUp": { "title": "Wrap up" }
        }));
        let table = vec![
            SectionDescriptor::new("setup", &["tip", "warning"]),
            SectionDescriptor::new("wrapUp", &[]),
        ];

        let sections = SectionResolver::new(&catalog, true).resolve("x", &table);
        assert_eq!(keys(&sections), ["setup", "wrapUp"]);
        assert_eq!(sections[0].subsections[0].key, "tip");
        assert_eq!(sections[0].subsections.len(), 1);
        assert!(!sections[0].conclusion);
        assert!(sections[1].conclusion);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let catalog = catalog(full_content());
        let resolver = SectionResolver::new(&catalog, true);
        assert_eq!(
            resolver.resolve("x", default_sections()),
            resolver.resolve("x", default_sections())
        );
    }

    #[test]
    fn test_locale_switch_shrinks_output() {
        let en = catalog(full_content());
        let ar = Catalog::from_value(
            "ar",
            json!({ "BlogPosts": { "x": { "title": "المنشور", "content": {
                "whyBinaryMatters": { "title": "لماذا الثنائي مهم" },
                "conclusion": { "title": "الخلاصة", "text": "الثنائي في كل مكان" }
            } } } }),
        )
        .unwrap();

        let en_sections = SectionResolver::new(&en, true).resolve("x", default_sections());
        let ar_sections = SectionResolver::new(&ar, true).resolve("x", default_sections());
        assert_eq!(en_sections.len(), 6);
        assert_eq!(keys(&ar_sections), ["whyBinaryMatters", "conclusion"]);
        assert_eq!(ar_sections[0].title, "لماذا الثنائي مهم");
    }

    #[test]
    fn test_intro_and_existence() {
        let catalog = catalog(full_content());
        let resolver = SectionResolver::new(&catalog, true);
        assert_eq!(
            resolver.intro("x").as_deref(),
            Some("Computers think in ones and zeros.")
        );
        assert!(resolver.content_exists("x"));
        assert!(!resolver.content_exists("y"));
        assert_eq!(resolver.intro("y"), None);
    }

    #[test]
    fn test_empty_catalog_resolves_nothing() {
        let catalog = Catalog::default();
        let resolver = SectionResolver::new(&catalog, true);
        assert!(resolver.resolve("x", default_sections()).is_empty());
        assert!(resolver.resolve("x", &[]).is_empty());
    }
}
