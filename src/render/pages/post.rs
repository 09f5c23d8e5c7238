//! Blog post detail page.

use crate::{
    content::{BlogPost, ResolvedSection, blog::POSTS_NAMESPACE},
    render::{
        PageContext, Route,
        layout::{self, Document},
        theme::{SectionTheme, image_slot, subsection_icon, subsection_label},
    },
    utils::html::{escape, escape_attr},
};
use std::fmt::Write;

/// Render `post`, or `None` when it has no content in this locale.
pub fn render(ctx: &PageContext<'_>, post: &BlogPost) -> Option<String> {
    let resolver = ctx.site.resolver(ctx.locale);
    let key = post.content_key();
    if !resolver.content_exists(key) {
        return None;
    }

    let t = ctx.t("Blog");
    let title = post.title(ctx.catalog);
    let description = ctx
        .t(POSTS_NAMESPACE)
        .get(&format!("{key}.description"))
        .filter(|d| !d.is_empty())
        .map(str::to_string);
    let route = Route::Post(post.slug.clone());

    let mut body = String::with_capacity(8 * 1024);
    let _ = write!(
        body,
        "<article class=\"post\" aria-labelledby=\"post-title\">\n\
         <a class=\"back\" href=\"{}\">{}</a>\n<header>\n<ul class=\"tags\">",
        escape_attr(&ctx.url(&Route::Blog)),
        escape(&t.t_or("backToBlog", "Back to Blog"))
    );
    for tag in &post.tags {
        let _ = write!(
            body,
            "<li><a class=\"tag\" href=\"{}\">{}</a></li>",
            escape_attr(&ctx.url(&Route::BlogTag(tag.clone()))),
            escape(tag)
        );
    }
    body.push_str("</ul>\n");
    let _ = writeln!(body, "<h1 id=\"post-title\">{}</h1>", escape(&title));
    body.push_str(&byline(ctx, post));
    if let Some(description) = &description {
        let _ = writeln!(body, "<p class=\"lead\">{}</p>", escape(description));
    }
    body.push_str("</header>\n");

    if !post.cover_image.is_empty() {
        let _ = writeln!(
            body,
            "<img class=\"cover\" src=\"{}\" alt=\"{}\">",
            escape_attr(&ctx.asset(&post.cover_image)),
            escape_attr(&title)
        );
    }
    if let Some(intro) = resolver.intro(key) {
        let _ = writeln!(body, "<p class=\"intro\">{}</p>", escape(&intro));
    }

    let images = post.images();
    for (index, section) in resolver.resolve(key, post.section_table()).iter().enumerate() {
        body.push_str(&render_section(ctx, index, section, images, &title));
    }

    body.push_str(&share(ctx, post));
    body.push_str("</article>\n");

    Some(layout::render(
        ctx,
        Document {
            route: &route,
            title: &title,
            description: description.as_deref().unwrap_or_default(),
            body,
        },
    ))
}

fn byline(ctx: &PageContext<'_>, post: &BlogPost) -> String {
    let t = ctx.t("Blog");
    let minutes = post.read_time.to_string();
    let long_date = post.date.to_long_date();
    let author = if post.author.name.is_empty() {
        String::new()
    } else {
        format!(
            "<span>{}</span> · ",
            escape(&t.t_with("byAuthor", &[("author", post.author.name.as_str())]))
        )
    };
    format!(
        "<p class=\"meta\">{author}<time datetime=\"{}\">{}</time> · {}</p>\n",
        post.date,
        escape(&t.t_with("publishedOn", &[("date", long_date.as_str())])),
        escape(&t.t_with("readTime", &[("minutes", minutes.as_str())]))
    )
}

fn render_section(
    ctx: &PageContext<'_>,
    index: usize,
    section: &ResolvedSection,
    images: [&str; 3],
    post_title: &str,
) -> String {
    let theme = SectionTheme::for_index(index);
    let badge = if section.conclusion {
        "✓".to_string()
    } else {
        (index + 1).to_string()
    };
    let class = if section.conclusion {
        format!("section {} conclusion", theme.class())
    } else {
        format!("section {}", theme.class())
    };
    let id = escape_attr(&format!("section-{}", section.key)).into_owned();

    let mut out = format!(
        "<section id=\"{id}\" class=\"{class}\" aria-labelledby=\"{id}-title\">\n\
         <h2 id=\"{id}-title\"><span class=\"badge\" aria-hidden=\"true\">{badge}</span> {}</h2>\n",
        escape(&section.title)
    );

    if !section.text.is_empty() {
        if section.conclusion {
            let _ = writeln!(out, "<div class=\"highlight\"><p>{}</p></div>", escape(&section.text));
        } else {
            let _ = writeln!(out, "<p>{}</p>", escape(&section.text));
        }
    }

    if !section.conclusion {
        for sub in &section.subsections {
            let _ = write!(
                out,
                "<div class=\"subsection\">\n<h3><span aria-hidden=\"true\">{}</span> {}</h3>\n\
                 <p>{}</p>\n</div>\n",
                subsection_icon(&sub.key),
                escape(&subsection_label(ctx.catalog, &sub.key)),
                escape(&sub.content)
            );
        }
    }

    if let Some(image) = image_slot(index, section.conclusion, images) {
        let _ = writeln!(
            out,
            "<figure><img src=\"{}\" alt=\"{} - {}\" loading=\"lazy\"></figure>",
            escape_attr(&ctx.asset(image)),
            escape_attr(post_title),
            escape_attr(&section.title)
        );
    }

    out.push_str("</section>\n");
    out
}

fn share(ctx: &PageContext<'_>, post: &BlogPost) -> String {
    let t = ctx.t("Blog");
    let avatar = if post.author.avatar.is_empty() {
        String::new()
    } else {
        format!(
            "<img class=\"avatar\" src=\"{}\" alt=\"{}\" width=\"48\" height=\"48\">",
            escape_attr(&ctx.asset(&post.author.avatar)),
            escape_attr(&post.author.name)
        )
    };
    format!(
        "<footer class=\"share\">\n{avatar}<span>{}</span>\n\
         <button type=\"button\" class=\"button\" data-share>{}</button>\n</footer>\n",
        escape(&post.author.name),
        escape(&t.t_or("shareArticle", "Share Article"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::site;

    fn post_html(locale: &str, slug: &str) -> Option<String> {
        let site = site();
        let post = site.content.posts.get(slug).unwrap().clone();
        render(&site.context(locale), &post)
    }

    #[test]
    fn test_full_post() {
        let html = post_html("en", "binary-basics").unwrap();

        assert!(html.contains("<h1 id=\"post-title\">Binary Basics</h1>"));
        assert!(html.contains("<p class=\"lead\">Ones and zeros</p>"));
        assert!(html.contains("<p class=\"intro\">Let&#39;s count in base two.</p>"));

        // Emitted sections: whyBinaryMatters, practicalExample, conclusion
        assert!(html.contains("class=\"section theme-blue\""));
        assert!(html.contains("class=\"section theme-purple\""));
        assert!(html.contains("class=\"section theme-orange conclusion\""));
        assert!(html.contains("<span class=\"badge\" aria-hidden=\"true\">2</span> Practical"));
        assert!(html.contains("<span class=\"badge\" aria-hidden=\"true\">✓</span> Conclusion"));
        assert!(html.contains("<div class=\"highlight\"><p>Binary is everywhere.</p></div>"));
        assert!(!html.contains("section-binaryInRam"));

        assert!(html.contains("Real-World Applications"));
        assert!(html.contains("🌍"));
        assert!(html.contains("5 is 101"));
    }

    #[test]
    fn test_image_slots() {
        let html = post_html("en", "binary-basics").unwrap();
        // Slot 0 gets the first image; slot 1 never has one; slot 2 is the conclusion.
        assert!(html.contains("/blog/post-1/illustration-1.png"));
        assert!(!html.contains("/blog/post-1/illustration-2.png"));
    }

    #[test]
    fn test_locale_without_content() {
        assert!(post_html("ar", "english-only").is_none());

        let html = post_html("ar", "binary-basics").unwrap();
        assert!(html.contains("dir=\"rtl\""));
        assert!(html.contains("أساسيات الثنائي"));
        assert!(!html.contains("class=\"lead\""));
        assert!(!html.contains("class=\"intro\""));
        assert!(html.contains("conclusion"));
        assert!(!html.contains("theme-purple"));
    }

    #[test]
    fn test_section_id_escapes_key() {
        let site = site();
        let section = ResolvedSection {
            key: "x\"><script>".into(),
            title: "Title".into(),
            text: String::new(),
            subsections: Vec::new(),
            conclusion: false,
        };
        let html = render_section(&site.context("en"), 0, &section, ["", "", ""], "Post");
        assert!(html.contains("id=\"section-x&quot;&gt;&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
    }
}
