//! RSS 2.0 feed generation.

use super::FeedPost;
use crate::config::SiteConfig;
use anyhow::{Result, anyhow};
use rss::{
    Category, CategoryBuilder, ChannelBuilder, Guid, GuidBuilder, Item, ItemBuilder,
    validation::Validate,
};

/// Render the RSS channel for `posts`.
pub fn to_xml(config: &SiteConfig, language: &str, posts: &[FeedPost]) -> Result<String> {
    let site = &config.site;
    let link = config
        .absolute_url(&crate::i18n::LocaleRouting::localized_path(language, "/"))
        .unwrap_or_default();

    let items: Vec<Item> = posts.iter().map(|post| post_to_item(post, &site.email)).collect();

    let channel = ChannelBuilder::default()
        .title(site.title.clone())
        .link(link)
        .description(site.description.clone())
        .language(Some(language.to_string()))
        .generator(Some(format!("folio {}", env!("CARGO_PKG_VERSION"))))
        .last_build_date(posts.iter().map(|p| p.date).max().map(|d| d.to_rfc2822()))
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("invalid rss feed: {e}"))?;
    Ok(channel.to_string())
}

fn post_to_item(post: &FeedPost, email: &str) -> Item {
    let guid: Guid = GuidBuilder::default()
        .value(post.link.clone())
        .permalink(true)
        .build();

    let categories: Vec<Category> = post
        .tags
        .iter()
        .map(|tag| CategoryBuilder::default().name(tag.clone()).build())
        .collect();

    // RSS wants `email (name)` for authors
    let author = post.author.as_ref().map(|name| {
        if email.is_empty() {
            name.clone()
        } else {
            format!("{email} ({name})")
        }
    });

    ItemBuilder::default()
        .title(Some(post.title.clone()))
        .link(Some(post.link.clone()))
        .description(Some(post.description.clone()))
        .pub_date(Some(post.date.to_rfc2822()))
        .author(author)
        .guid(Some(guid))
        .categories(categories)
        .build()
}
