//! Static content registries: blog posts and projects.
//!
//! Both are loaded once from `content.toml` and never change afterwards:
//!
//! ```toml
//! [[posts]]
//! id = "1"
//! slug = "binary-decimal-conversion-programming"
//! content_key = "binaryDecimalConversion"
//! date = "2025-10-13"
//! read_time = 5
//! tags = ["Programming", "Computer Science"]
//! author = { name = "Yousef Ayman", avatar = "/yusif.jpg" }
//!
//! [[projects]]
//! id = "talentbridge"
//! title = "TalentBridge"
//! description_key = "talentbridge"
//! technologies = ["Next.js", "TypeScript"]
//! featured = true
//! ```
//!
//! Localized titles and descriptions are not stored here; they are read from
//! the catalogs through the keys above.

pub mod blog;
pub mod project;
pub mod sections;

pub use blog::{BlogPost, BlogRegistry};
pub use project::{Project, ProjectRegistry};
pub use sections::{ResolvedSection, SectionResolver};

use crate::utils::slug::slugify;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while loading `content.toml`.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("content file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("duplicate post slug `{0}`")]
    DuplicateSlug(String),

    #[error("duplicate project id `{0}`")]
    DuplicateProject(String),

    #[error("post `{0}` has an empty content key")]
    EmptyContentKey(String),

    #[error("invalid post slug `{0}`, expected lowercase letters, digits and single dashes")]
    InvalidSlug(String),

    #[error("{kind} `{first}` and `{second}` share the page slug `{slug}`")]
    SlugCollision {
        kind: &'static str,
        first: String,
        second: String,
        slug: String,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentFile {
    posts: Vec<BlogPost>,
    projects: Vec<Project>,
}

/// Both registries of a site.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    pub posts: BlogRegistry,
    pub projects: ProjectRegistry,
}

impl ContentRegistry {
    /// Parse and validate `content.toml` text.
    pub fn from_str(content: &str) -> Result<Self, ContentError> {
        let file: ContentFile = toml::from_str(content)?;

        let mut slugs = FxHashSet::default();
        for post in &file.posts {
            if !is_page_slug(&post.slug) {
                return Err(ContentError::InvalidSlug(post.slug.clone()));
            }
            if !slugs.insert(post.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(post.slug.clone()));
            }
            if post.content_key().is_empty() {
                return Err(ContentError::EmptyContentKey(post.slug.clone()));
            }
        }

        let mut ids = FxHashSet::default();
        for project in &file.projects {
            if !ids.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProject(project.id.clone()));
            }
        }

        let content = Self {
            posts: BlogRegistry::new(file.posts),
            projects: ProjectRegistry::new(file.projects),
        };
        check_label_slugs("tags", &content.posts.tags())?;
        check_label_slugs("technologies", &content.projects.technologies())?;
        Ok(content)
    }

    /// Load the registry file. A missing file yields an empty registry.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).map_err(|e| ContentError::Io(path.to_path_buf(), e))?;
        Self::from_str(&content)
    }
}

/// A post slug must be one URL path segment that `slugify` leaves unchanged.
fn is_page_slug(slug: &str) -> bool {
    !slug.is_empty() && slugify(slug) == slug
}

/// Distinct labels must not map onto the same filter page.
fn check_label_slugs(kind: &'static str, labels: &[&str]) -> Result<(), ContentError> {
    let mut seen: FxHashMap<String, &str> = FxHashMap::default();
    for &label in labels {
        let slug = slugify(label);
        if let Some(first) = seen.insert(slug.clone(), label) {
            return Err(ContentError::SlugCollision {
                kind,
                first: first.to_string(),
                second: label.to_string(),
                slug,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[posts]]
id = "1"
slug = "first"
content_key = "firstPost"
date = "2025-01-01"
read_time = 3
tags = ["Rust"]
author = { name = "A", avatar = "/a.jpg" }

[[posts]]
id = "2"
slug = "second"
content_key = "secondPost.content"
date = "2025-02-01"
read_time = 4
author = { name = "A", avatar = "/a.jpg" }

[[projects]]
id = "p1"
title = "P1"
description_key = "p1"
technologies = ["Rust"]
"#;

    #[test]
    fn test_parse_sample() {
        let content = ContentRegistry::from_str(SAMPLE).unwrap();
        assert_eq!(content.posts.all().len(), 2);
        assert_eq!(content.posts.all()[0].slug, "second");
        assert_eq!(content.posts.get("second").unwrap().content_key(), "secondPost");
        assert_eq!(content.projects.all().len(), 1);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let doubled = format!("{SAMPLE}\n{}", &SAMPLE[..SAMPLE.find("[[posts]]\nid = \"2\"").unwrap()]);
        let err = ContentRegistry::from_str(&doubled).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug(slug) if slug == "first"));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let bad = SAMPLE.replace("2025-01-01", "2025-13-01");
        assert!(matches!(
            ContentRegistry::from_str(&bad),
            Err(ContentError::Toml(_))
        ));
    }

    #[test]
    fn test_unsafe_slugs_rejected() {
        for slug in ["", "../../../outside", "a/b", "Binary Basics", "trailing-"] {
            let bad = SAMPLE.replace("slug = \"first\"", &format!("slug = {slug:?}"));
            let err = ContentRegistry::from_str(&bad).unwrap_err();
            assert!(
                matches!(&err, ContentError::InvalidSlug(s) if s == slug),
                "{slug:?} accepted: {err}"
            );
        }
    }

    #[test]
    fn test_colliding_tags_rejected() {
        let bad = SAMPLE.replace("tags = [\"Rust\"]", "tags = [\"Node.js\", \"node js\"]");
        let err = ContentRegistry::from_str(&bad).unwrap_err();
        assert!(matches!(
            err,
            ContentError::SlugCollision { kind: "tags", ref slug, .. } if slug == "node-js"
        ));
    }

    #[test]
    fn test_colliding_technologies_rejected() {
        let bad = SAMPLE.replace(
            "technologies = [\"Rust\"]",
            "technologies = [\"React.js\", \"React JS\"]",
        );
        let err = ContentRegistry::from_str(&bad).unwrap_err();
        assert!(matches!(
            err,
            ContentError::SlugCollision { kind: "technologies", .. }
        ));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let content = ContentRegistry::load(&dir.path().join("content.toml")).unwrap();
        assert!(content.posts.all().is_empty());
        assert!(content.projects.all().is_empty());
    }
}
