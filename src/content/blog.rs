//! Blog post records and the post registry.

use super::sections::SectionDescriptor;
use crate::{i18n::Catalog, utils::date::PostDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Catalog namespace holding post titles, descriptions and content.
pub const POSTS_NAMESPACE: &str = "BlogPosts";

/// Post author shown in the byline and share block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

/// One blog post. Identity is the slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    /// Catalog key of the post under `BlogPosts`. A trailing `.content`
    /// (as in `"binaryDecimalConversion.content"`) is accepted and ignored.
    pub content_key: String,
    #[serde(serialize_with = "serialize_date", deserialize_with = "deserialize_date")]
    pub date: PostDate,
    /// Minutes.
    pub read_time: u32,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub first_image: String,
    #[serde(default)]
    pub second_image: String,
    #[serde(default)]
    pub third_image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Author,
    /// Section table for this post; the built-in table is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<SectionDescriptor>>,
}

fn serialize_date<S: Serializer>(date: &PostDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(date)
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PostDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    PostDate::parse(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date `{raw}`, expected YYYY-MM-DD")))
}

impl BlogPost {
    /// Probe namespace root of the post: the content key up to its first dot.
    pub fn content_key(&self) -> &str {
        self.content_key.split('.').next().unwrap_or_default()
    }

    /// Localized title (echoes the key when untranslated).
    pub fn title(&self, catalog: &Catalog) -> String {
        catalog
            .namespace(POSTS_NAMESPACE)
            .t(&format!("{}.title", self.content_key()))
    }

    /// Localized description (echoes the key when untranslated).
    pub fn description(&self, catalog: &Catalog) -> String {
        catalog
            .namespace(POSTS_NAMESPACE)
            .t(&format!("{}.description", self.content_key()))
    }

    /// Whether the translated title or description contains `needle`
    /// (already lowercase). Untranslated text never matches.
    fn matches(&self, needle: &str, catalog: &Catalog) -> bool {
        let t = catalog.namespace(POSTS_NAMESPACE);
        ["title", "description"].iter().any(|field| {
            t.get(&format!("{}.{field}", self.content_key()))
                .is_some_and(|text| text.to_lowercase().contains(needle))
        })
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The three inline illustration slots, in order.
    pub fn images(&self) -> [&str; 3] {
        [&self.first_image, &self.second_image, &self.third_image]
    }

    /// Section table of this post.
    pub fn section_table(&self) -> &[SectionDescriptor] {
        self.sections
            .as_deref()
            .unwrap_or(super::sections::default_sections())
    }
}

/// All posts, newest first.
#[derive(Debug, Clone, Default)]
pub struct BlogRegistry {
    posts: Vec<BlogPost>,
}

impl BlogRegistry {
    /// Posts are ordered by date descending; equal dates keep file order.
    pub fn new(mut posts: Vec<BlogPost>) -> Self {
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Self { posts }
    }

    pub fn all(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn get(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Distinct tags in first-seen order.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.posts.iter().flat_map(|p| &p.tags) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Posts matching a free-text query and an optional tag.
    ///
    /// The query matches case-insensitively against the localized title or
    /// description. An empty query matches everything; `None` tag means all.
    pub fn filter(&self, query: &str, tag: Option<&str>, catalog: &Catalog) -> Vec<&BlogPost> {
        let needle = query.trim().to_lowercase();
        self.posts
            .iter()
            .filter(|post| tag.is_none_or(|tag| post.has_tag(tag)))
            .filter(|post| needle.is_empty() || post.matches(&needle, catalog))
            .collect()
    }
}
