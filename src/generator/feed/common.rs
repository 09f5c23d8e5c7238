//! Common utilities for feed generation.

use crate::{
    debug,
    i18n::LocaleRouting,
    render::{Route, Site},
    utils::date::PostDate,
};

/// A post ready for syndication, localized to the default locale.
#[derive(Debug, Clone)]
pub struct FeedPost {
    pub title: String,
    pub description: String,
    /// Absolute URL of the post page.
    pub link: String,
    pub date: PostDate,
    pub author: Option<String>,
    pub tags: Vec<String>,
}

/// Posts with a page in the default locale, newest first.
pub fn feed_posts(site: &Site) -> Vec<FeedPost> {
    let locale = site.routing.default_locale();
    let catalog = site.catalog(locale);
    let config = &site.config;

    let posts: Vec<FeedPost> = site
        .content
        .posts
        .all()
        .iter()
        .filter(|post| site.post_exists(locale, post))
        .filter_map(|post| {
            let path = LocaleRouting::localized_path(locale, &Route::Post(post.slug.clone()).path());
            Some(FeedPost {
                title: post.title(catalog),
                description: post.description(catalog),
                link: config.absolute_url(&path)?,
                date: post.date,
                author: (!post.author.name.is_empty()).then(|| post.author.name.clone()),
                tags: post.tags.clone(),
            })
        })
        .collect();

    let excluded = site.content.posts.all().len() - posts.len();
    if excluded > 0 {
        debug!("feed"; "excluded {} posts without content in `{}`", excluded, locale);
    }
    posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::site;

    #[test]
    fn test_feed_posts() {
        let mut site = site();
        site.config.site.url = Some("https://example.com/".into());
        let posts = feed_posts(&site);

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Binary Basics");
        assert_eq!(posts[0].link, "https://example.com/en/blog/binary-basics/");
        assert_eq!(posts[0].author.as_deref(), Some("Sara"));
        assert_eq!(posts[1].author, None);
    }

    #[test]
    fn test_feed_posts_need_url() {
        assert!(feed_posts(&site()).is_empty());
    }
}
