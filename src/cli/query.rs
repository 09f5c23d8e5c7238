//! Query command implementation.
//!
//! Reports posts, projects or the resolved sections of one post as JSON,
//! with localized text taken from the requested locale's catalog.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::args::{QueryArgs, QueryTarget};
use crate::content::{BlogPost, Project, ResolvedSection};
use crate::log;
use crate::render::{Route, Site};
use crate::utils::plural_count;

/// A post with its text resolved in one locale.
#[derive(Debug, Serialize)]
pub struct PostQueryResult<'a> {
    pub url: String,
    pub title: String,
    pub description: String,
    /// Whether the post has a page in this locale.
    pub published: bool,
    #[serde(flatten)]
    pub post: &'a BlogPost,
}

/// A project with its description resolved in one locale.
#[derive(Debug, Serialize)]
pub struct ProjectQueryResult<'a> {
    pub description: String,
    #[serde(flatten)]
    pub project: &'a Project,
}

/// Resolved sections of one post.
#[derive(Debug, Serialize)]
pub struct SectionsQueryResult<'a> {
    pub slug: &'a str,
    pub locale: &'a str,
    pub intro: Option<String>,
    pub sections: Vec<ResolvedSection>,
}

/// Execute query command
pub fn run_query(args: &QueryArgs, site: &Site) -> Result<()> {
    let locale = match args.locale.as_deref() {
        Some(locale) if !site.routing.is_supported(locale) => {
            bail!(
                "unsupported locale '{}', expected one of: {}",
                locale,
                site.routing.locales().join(", ")
            )
        }
        requested => site.routing.resolve(requested),
    };

    let (value, count) = match args.target {
        QueryTarget::Posts => {
            let posts = query_posts(site, locale, args);
            (serde_json::to_value(&posts)?, posts.len())
        }
        QueryTarget::Projects => {
            let projects = query_projects(site, locale, args);
            (serde_json::to_value(&projects)?, projects.len())
        }
        QueryTarget::Sections => {
            let Some(slug) = args.slug.as_deref() else {
                bail!("`query sections` requires --slug");
            };
            let sections = query_sections(site, locale, slug)?;
            let count = sections.sections.len();
            (serde_json::to_value(&sections)?, count)
        }
    };

    let noun = match args.target {
        QueryTarget::Posts => "post",
        QueryTarget::Projects => "project",
        QueryTarget::Sections => "section",
    };
    log!("query"; "found {} in {}", plural_count(count, noun), locale);

    output_results(&value, args)
}

fn query_posts<'a>(site: &'a Site, locale: &str, args: &QueryArgs) -> Vec<PostQueryResult<'a>> {
    let catalog = site.catalog(locale);
    let ctx = site.context(locale);
    let query = args.search.as_deref().unwrap_or_default();

    site.content
        .posts
        .filter(query, args.tag.as_deref(), catalog)
        .into_iter()
        .filter(|post| args.slug.as_deref().is_none_or(|slug| post.slug == slug))
        .map(|post| PostQueryResult {
            url: ctx.url(&Route::Post(post.slug.clone())),
            title: post.title(catalog),
            description: post.description(catalog),
            published: site.post_exists(locale, post),
            post,
        })
        .collect()
}

fn query_projects<'a>(
    site: &'a Site,
    locale: &str,
    args: &QueryArgs,
) -> Vec<ProjectQueryResult<'a>> {
    let catalog = site.catalog(locale);

    let projects = match args.slug.as_deref() {
        Some(id) => site.content.projects.get(id).into_iter().collect(),
        None => site.content.projects.filter_by_tech(None),
    };

    projects
        .into_iter()
        .filter(|project| args.tag.as_deref().is_none_or(|tech| project.uses(tech)))
        .map(|project| ProjectQueryResult {
            description: project.description(catalog),
            project,
        })
        .collect()
}

fn query_sections<'a>(
    site: &Site,
    locale: &'a str,
    slug: &'a str,
) -> Result<SectionsQueryResult<'a>> {
    let post = site
        .content
        .posts
        .get(slug)
        .with_context(|| format!("no post with slug '{slug}'"))?;

    let resolver = site.resolver(locale);
    Ok(SectionsQueryResult {
        slug,
        locale,
        intro: resolver.intro(post.content_key()),
        sections: resolver.resolve(post.content_key(), post.section_table()),
    })
}

fn output_results(value: &JsonValue, args: &QueryArgs) -> Result<()> {
    let formatted = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        writeln!(file, "{formatted}")?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}
