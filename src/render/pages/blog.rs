//! Blog listing with search and tag filters.

use super::{page_heading, post_card, projects::filter_link};
use crate::{
    render::{
        PageContext, Route,
        layout::{self, Document},
    },
    utils::{
        html::{escape, escape_attr},
        plural_count,
    },
};
use std::fmt::Write;

/// Render the listing for `query` and `tag`.
///
/// Static builds pass an empty query; the search box then filters in the
/// browser over each card's `data-search`. The dev server renders queried
/// listings directly.
pub fn render(ctx: &PageContext<'_>, query: &str, tag: Option<&str>) -> String {
    let t = ctx.t("Blog");
    let registry = &ctx.site.content.posts;
    let posts: Vec<_> = registry
        .filter(query, tag, ctx.catalog)
        .into_iter()
        .filter(|post| ctx.site.post_exists(ctx.locale, post))
        .collect();

    let route = tag.map_or(Route::Blog, |tag| Route::BlogTag(tag.to_string()));
    let mut body = page_heading("blog-heading", &t.t("title"), &t.t("description"));

    let _ = write!(
        body,
        "<form class=\"search\" role=\"search\" action=\"{action}\" method=\"get\">\n\
         <label class=\"visually-hidden\" for=\"blog-search\">{placeholder}</label>\n\
         <input id=\"blog-search\" name=\"q\" type=\"search\" value=\"{value}\" \
         placeholder=\"{placeholder}\" data-search-input>\n</form>\n",
        action = escape_attr(&ctx.url(&route)),
        placeholder = escape_attr(&t.t_or("searchPlaceholder", "Search articles...")),
        value = escape_attr(query),
    );

    let _ = write!(
        body,
        "<nav class=\"filters\" aria-label=\"{}\">\n<ul>\n",
        escape_attr(&t.t_or("filterByTag", "Filter by tag"))
    );
    let _ = writeln!(
        body,
        "<li>{}</li>",
        filter_link(ctx, &Route::Blog, &t.t("allTags"), tag.is_none())
    );
    for name in registry.tags() {
        let _ = writeln!(
            body,
            "<li>{}</li>",
            filter_link(ctx, &Route::BlogTag(name.to_string()), name, tag == Some(name))
        );
    }
    body.push_str("</ul>\n</nav>\n");

    let count = posts.len().to_string();
    let showing = t
        .get("showingPosts")
        .map(|template| crate::i18n::catalog::interpolate(template, &[("count", count.as_str())]))
        .unwrap_or_else(|| format!("Showing {}", plural_count(posts.len(), "article")));
    let empty = escape(&t.t_or("noPostsFound", "No articles found")).into_owned();

    if posts.is_empty() {
        let _ = writeln!(body, "<p class=\"empty\" role=\"status\">{empty}</p>");
    } else {
        let _ = writeln!(
            body,
            "<p class=\"count\" role=\"status\" data-empty=\"{}\">{}</p>\n<div class=\"grid\">",
            escape_attr(&empty),
            escape(&showing)
        );
        for post in &posts {
            body.push_str(&post_card(ctx, post));
        }
        body.push_str("</div>\n");
    }

    let title = match tag {
        Some(tag) => format!("{} · {tag}", t.t("title")),
        None => t.t("title"),
    };
    layout::render(
        ctx,
        Document {
            route: &route,
            title: &title,
            description: &t.t("description"),
            body,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::site;

    #[test]
    fn test_listing_order_and_count() {
        let site = site();
        let html = render(&site.context("en"), "", None);
        assert!(html.contains("Showing 2 articles"));
        let newer = html.find("/en/blog/binary-basics/").unwrap();
        let older = html.find("/en/blog/english-only/").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_tag_and_query() {
        let site = site();
        let ctx = site.context("en");

        let html = render(&ctx, "", Some("Node.js"));
        assert!(html.contains("Showing 1 articles"));
        assert!(!html.contains("href=\"/en/blog/english-only/\""));

        let html = render(&ctx, "ZEROS", None);
        assert!(html.contains("href=\"/en/blog/binary-basics/\""));
        assert!(!html.contains("href=\"/en/blog/english-only/\""));

        let html = render(&ctx, "nothing matches", None);
        assert!(html.contains("<p class=\"empty\" role=\"status\">No articles found</p>"));
    }

    #[test]
    fn test_untranslated_posts_not_listed() {
        let site = site();
        let html = render(&site.context("ar"), "", None);
        assert!(html.contains("href=\"/ar/blog/binary-basics/\""));
        assert!(!html.contains("/ar/blog/english-only/"));
    }
}
