//! HTML rendering.
//!
//! # Module Structure
//!
//! ```text
//! render/
//! ├── layout.rs   # document shell: head, header nav, language switch, footer
//! ├── pages/      # one module per page family
//! ├── state.rs    # Carousel, ThemeMode
//! ├── theme.rs    # section palette, icons, labels, image slots
//! └── mod.rs      # Site, Route, PageContext, render_all (this file)
//! ```
//!
//! Every locale gets the same page tree under `/{locale}/`. Locales are
//! rendered in parallel; catalogs and registries are shared read-only.

pub mod layout;
pub mod pages;
pub mod state;
pub mod theme;

use crate::{
    config::SiteConfig,
    content::{BlogPost, ContentRegistry, SectionResolver},
    debug,
    i18n::{Catalog, LocaleRouting, Messages, Translator},
    utils::{date::PostDate, slug::slugify},
};
use anyhow::{Context, Result};
use rayon::prelude::*;

/// Everything a render needs, loaded once per build or server start.
#[derive(Debug)]
pub struct Site {
    pub config: SiteConfig,
    pub routing: LocaleRouting,
    pub messages: Messages,
    pub content: ContentRegistry,
}

impl Site {
    pub fn load(config: SiteConfig) -> Result<Self> {
        let routing = config.i18n.routing();
        let messages = Messages::load(&config.i18n.messages, &routing)?;
        let content = ContentRegistry::load(&config.content.registry).with_context(|| {
            format!(
                "Failed to load content registry {}",
                config.content.registry.display()
            )
        })?;

        debug!(
            "content";
            "{} posts, {} projects",
            content.posts.all().len(),
            content.projects.all().len()
        );

        Ok(Self::from_parts(config, messages, content))
    }

    pub fn from_parts(config: SiteConfig, messages: Messages, content: ContentRegistry) -> Self {
        let routing = config.i18n.routing();
        Self {
            config,
            routing,
            messages,
            content,
        }
    }

    pub fn catalog(&self, locale: &str) -> &Catalog {
        self.messages.get(locale)
    }

    pub fn resolver(&self, locale: &str) -> SectionResolver<'_> {
        SectionResolver::new(self.catalog(locale), self.config.i18n.echo_guard)
    }

    /// Whether `post` has a page in `locale`.
    pub fn post_exists(&self, locale: &str, post: &BlogPost) -> bool {
        self.resolver(locale).content_exists(post.content_key())
    }

    pub fn context<'a>(&'a self, locale: &'a str) -> PageContext<'a> {
        PageContext {
            site: self,
            locale,
            catalog: self.catalog(locale),
        }
    }
}

/// A page of the per-locale tree, independent of locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    /// Projects using one technology, by display name.
    ProjectsByTech(String),
    Blog,
    /// Posts with one tag, by display name.
    BlogTag(String),
    Post(String),
}

impl Route {
    /// Path below the locale prefix, always with a trailing slash.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::Projects => "/projects/".into(),
            Self::ProjectsByTech(tech) => format!("/projects/tech/{}/", slugify(tech)),
            Self::Blog => "/blog/".into(),
            Self::BlogTag(tag) => format!("/blog/tag/{}/", slugify(tag)),
            Self::Post(slug) => format!("/blog/{slug}/"),
        }
    }

    pub const fn nav(&self) -> layout::NavItem {
        match self {
            Self::Home => layout::NavItem::Home,
            Self::Projects | Self::ProjectsByTech(_) => layout::NavItem::Projects,
            Self::Blog | Self::BlogTag(_) | Self::Post(_) => layout::NavItem::Blog,
        }
    }
}

/// Locale-bound view of the site used by page renderers.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site: &'a Site,
    pub locale: &'a str,
    pub catalog: &'a Catalog,
}

impl<'a> PageContext<'a> {
    pub fn t(&self, namespace: &'a str) -> Translator<'a> {
        self.catalog.namespace(namespace)
    }

    /// Public URL of `route` in this locale.
    pub fn url(&self, route: &Route) -> String {
        self.url_in(self.locale, route)
    }

    /// Public URL of `route` in another locale.
    pub fn url_in(&self, locale: &str, route: &Route) -> String {
        self.site
            .config
            .url_for(&LocaleRouting::localized_path(locale, &route.path()))
    }

    /// Public URL of a static file such as `/projects/marketio.png`.
    pub fn asset(&self, path: &str) -> String {
        if crate::utils::path::is_external_link(path) {
            path.to_string()
        } else {
            self.site.config.url_for(path)
        }
    }
}

/// One output file.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Site-relative URL, e.g. `/en/blog/`.
    pub url: String,
    pub locale: Option<String>,
    pub html: String,
    pub lastmod: Option<PostDate>,
}

impl RenderedPage {
    fn new(ctx: &PageContext<'_>, route: &Route, html: String) -> Self {
        Self {
            url: LocaleRouting::localized_path(ctx.locale, &route.path()),
            locale: Some(ctx.locale.to_string()),
            html,
            lastmod: None,
        }
    }
}

/// Render every page of every locale, plus the root redirect and 404 page.
pub fn render_all(site: &Site) -> Vec<RenderedPage> {
    let mut pages: Vec<RenderedPage> = site
        .routing
        .locales()
        .par_iter()
        .flat_map_iter(|locale| render_locale(site, locale))
        .collect();

    pages.push(pages::not_found::render_page(site));
    pages.push(pages::redirect::render_page(site));
    pages
}

/// Render one route; `None` when the route has no page in this locale.
pub fn render_route(ctx: &PageContext<'_>, route: &Route) -> Option<String> {
    let html = match route {
        Route::Home => pages::home::render(ctx),
        Route::Projects => pages::projects::render(ctx, None),
        Route::ProjectsByTech(tech) => pages::projects::render(ctx, Some(tech.as_str())),
        Route::Blog => pages::blog::render(ctx, "", None),
        Route::BlogTag(tag) => pages::blog::render(ctx, "", Some(tag.as_str())),
        Route::Post(slug) => {
            let post = ctx.site.content.posts.get(slug)?;
            pages::post::render(ctx, post)?
        }
    };
    Some(html)
}

/// Every route of the locale tree, in output order.
pub fn routes(site: &Site) -> Vec<Route> {
    let content = &site.content;
    let mut routes = vec![Route::Home, Route::Projects, Route::Blog];
    routes.extend(
        content
            .projects
            .technologies()
            .into_iter()
            .map(|tech| Route::ProjectsByTech(tech.to_string())),
    );
    routes.extend(
        content
            .posts
            .tags()
            .into_iter()
            .map(|tag| Route::BlogTag(tag.to_string())),
    );
    routes.extend(
        content
            .posts
            .all()
            .iter()
            .map(|post| Route::Post(post.slug.clone())),
    );
    routes
}

fn render_locale(site: &Site, locale: &str) -> Vec<RenderedPage> {
    let ctx = site.context(locale);
    routes(site)
        .into_iter()
        .filter_map(|route| {
            let Some(html) = render_route(&ctx, &route) else {
                debug!("render"; "skip {} in {}: no content", route.path(), locale);
                return None;
            };
            let mut page = RenderedPage::new(&ctx, &route, html);
            if let Route::Post(slug) = &route {
                page.lastmod = site.content.posts.get(slug).map(|post| post.date);
            }
            Some(page)
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub const CONTENT: &str = r#"
[[posts]]
id = "1"
slug = "binary-basics"
content_key = "binaryBasics.content"
date = "2025-10-13"
read_time = 5
cover_image = "/blog/post-1/cover.png"
first_image = "/blog/post-1/illustration-1.png"
second_image = "/blog/post-1/illustration-2.png"
tags = ["Programming", "Node.js"]
author = { name = "Sara", avatar = "/sara.jpg" }

[[posts]]
id = "2"
slug = "english-only"
content_key = "englishOnly"
date = "2025-09-01"
read_time = 3
tags = ["Programming"]

[[projects]]
id = "marketio"
title = "Marketio"
description_key = "marketio"
technologies = ["React.js", "Firebase"]
image = "/projects/marketio.jpg"
live_url = "https://marketio.example.com/"
github_url = "https://github.com/example/marketio"
featured = true
"#;

    pub fn en() -> serde_json::Value {
        json!({
            "Navigation": { "home": "Home", "projects": "Projects", "blog": "Blog", "contact": "Contact" },
            "Hero": { "name": "Sara", "summary": "Frontend developer" },
            "Blog": {
                "title": "Blog",
                "readTime": "{minutes} min read",
                "showingPosts": "Showing {count} articles",
                "noPostsFound": "No articles found",
                "realWorldApplications": "Real-World Applications"
            },
            "Projects": { "descriptions": { "marketio": "An online store" } },
            "BlogPosts": {
                "binaryBasics": {
                    "title": "Binary Basics",
                    "description": "Ones and zeros",
                    "content": {
                        "intro": "Let's count in base two.",
                        "whyBinaryMatters": { "title": "Why Binary Matters", "text": "Bits.", "example": "5 is 101" },
                        "practicalExample": { "title": "Practical", "realWorldUse": "Compression" },
                        "conclusion": { "title": "Conclusion", "text": "Binary is everywhere." }
                    }
                },
                "englishOnly": { "title": "English Only", "description": "Not translated" }
            }
        })
    }

    pub fn ar() -> serde_json::Value {
        json!({
            "Navigation": { "home": "الرئيسية" },
            "BlogPosts": {
                "binaryBasics": {
                    "title": "أساسيات الثنائي",
                    "content": { "conclusion": { "title": "الخلاصة" } }
                }
            }
        })
    }

    pub fn site() -> Site {
        let config = crate::config::test_parse_config("");
        let messages = Messages::from_catalogs(
            vec![
                Catalog::from_value("en", en()).unwrap(),
                Catalog::from_value("ar", ar()).unwrap(),
            ],
            "en",
        )
        .unwrap();
        let content = ContentRegistry::from_str(CONTENT).unwrap();
        Site::from_parts(config, messages, content)
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(
            Route::ProjectsByTech("React.js".into()).path(),
            "/projects/tech/react-js/"
        );
        assert_eq!(
            Route::BlogTag("Computer Science".into()).path(),
            "/blog/tag/computer-science/"
        );
        assert_eq!(Route::Post("x".into()).path(), "/blog/x/");
    }

    #[test]
    fn test_render_all_urls() {
        let site = site();
        let pages = render_all(&site);
        let urls: Vec<&str> = pages.iter().map(|p| p.url.as_str()).collect();

        for url in [
            "/en/",
            "/ar/",
            "/en/projects/",
            "/en/projects/tech/react-js/",
            "/en/blog/tag/node-js/",
            "/en/blog/binary-basics/",
            "/ar/blog/binary-basics/",
            "/en/blog/english-only/",
            "/404.html",
            "/",
        ] {
            assert!(urls.contains(&url), "missing {url}");
        }
        // No Arabic title for this post: no page
        assert!(!urls.contains(&"/ar/blog/english-only/"));
    }

    #[test]
    fn test_post_lastmod() {
        let pages = render_all(&site());
        let post = pages
            .iter()
            .find(|p| p.url == "/en/blog/binary-basics/")
            .unwrap();
        assert_eq!(post.lastmod.map(|d| d.to_string()).as_deref(), Some("2025-10-13"));
        assert_eq!(post.locale.as_deref(), Some("en"));
    }

    #[test]
    fn test_context_urls() {
        let site = site();
        let ctx = site.context("ar");
        assert_eq!(ctx.url(&Route::Blog), "/ar/blog/");
        assert_eq!(ctx.url_in("en", &Route::Home), "/en/");
        assert_eq!(ctx.asset("/sara.jpg"), "/sara.jpg");
        assert_eq!(ctx.asset("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
    }
}
