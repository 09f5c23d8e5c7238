//! Atom 1.0 feed generation.

use super::FeedPost;
use crate::{config::SiteConfig, utils::mime::types::ATOM};
use anyhow::Result;
use atom_syndication::{
    Category, CategoryBuilder, Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime,
    GeneratorBuilder, Link, LinkBuilder, Person, PersonBuilder, Text,
};

/// Render the Atom feed for `posts`.
pub fn to_xml(config: &SiteConfig, language: &str, posts: &[FeedPost]) -> Result<String> {
    let site = &config.site;
    let home = config
        .absolute_url(&crate::i18n::LocaleRouting::localized_path(language, "/"))
        .unwrap_or_default();
    let self_href = config
        .absolute_url(&config.build.feed.path.to_string_lossy())
        .unwrap_or_default();

    let entries: Vec<Entry> = posts.iter().filter_map(post_to_entry).collect();

    // Dates render as RFC 3339, so the newest post sorts last
    let updated: FixedDateTime = posts
        .iter()
        .map(|p| p.date)
        .max()
        .map(|date| date.to_rfc3339())
        .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string())
        .parse()
        .unwrap_or_default();

    let author: Person = PersonBuilder::default()
        .name(site.author.clone())
        .email((!site.email.is_empty()).then(|| site.email.clone()))
        .build();

    let self_link: Link = LinkBuilder::default()
        .href(self_href)
        .rel("self".to_string())
        .mime_type(Some(ATOM.to_string()))
        .build();

    let alternate_link: Link = LinkBuilder::default()
        .href(home.clone())
        .rel("alternate".to_string())
        .build();

    let feed: Feed = FeedBuilder::default()
        .title(Text::plain(site.title.clone()))
        .id(home)
        .updated(updated)
        .authors(vec![author])
        .links(vec![self_link, alternate_link])
        .subtitle(Some(Text::plain(site.description.clone())))
        .generator(Some(
            GeneratorBuilder::default()
                .value("folio")
                .version(Some(env!("CARGO_PKG_VERSION").to_string()))
                .build(),
        ))
        .lang(Some(language.to_string()))
        .entries(entries)
        .build();

    Ok(feed.to_string())
}

fn post_to_entry(post: &FeedPost) -> Option<Entry> {
    let updated: FixedDateTime = post.date.to_rfc3339().parse().ok()?;

    let entry_link: Link = LinkBuilder::default()
        .href(&post.link)
        .rel("alternate".to_string())
        .build();

    let authors: Vec<Person> = post
        .author
        .as_ref()
        .map(|name| vec![PersonBuilder::default().name(name.clone()).build()])
        .unwrap_or_default();

    let categories: Vec<Category> = post
        .tags
        .iter()
        .map(|tag| CategoryBuilder::default().term(tag.clone()).build())
        .collect();

    Some(
        EntryBuilder::default()
            .title(Text::plain(post.title.clone()))
            .id(&post.link)
            .updated(updated)
            .published(Some(updated))
            .links(vec![entry_link])
            .summary(Some(Text::plain(post.description.clone())))
            .authors(authors)
            .categories(categories)
            .build(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::PostDate;

    fn make_config() -> SiteConfig {
        let mut config = crate::config::test_parse_config("author = \"Sara\"\n");
        config.site.url = Some("https://example.com".into());
        config.build.feed.path = "atom.xml".into();
        config
    }

    fn post(date: PostDate) -> FeedPost {
        FeedPost {
            title: "Binary Basics".into(),
            description: "Ones and zeros".into(),
            link: "https://example.com/en/blog/binary-basics/".into(),
            date,
            author: Some("Sara".into()),
            tags: vec!["Programming".into()],
        }
    }

    #[test]
    fn test_post_to_entry() {
        let entry = post_to_entry(&post(PostDate::new(2024, 1, 15))).expect("should create entry");
        assert_eq!(entry.title().as_str(), "Binary Basics");
        assert_eq!(entry.id(), "https://example.com/en/blog/binary-basics/");
        assert!(entry.updated().to_rfc3339().starts_with("2024-01-15"));
        assert_eq!(entry.categories()[0].term(), "Programming");
    }

    #[test]
    fn test_atom_feed() {
        let posts = [post(PostDate::new(2024, 1, 15)), post(PostDate::new(2025, 3, 2))];
        let xml = to_xml(&make_config(), "en", &posts).unwrap();
        assert!(xml.contains("<updated>2025-03-02T00:00:00+00:00</updated>"));
        assert!(xml.contains("href=\"https://example.com/atom.xml\""));
        assert!(xml.contains("xml:lang=\"en\""));
        assert_eq!(xml.matches("<entry>").count(), 2);
    }
}
