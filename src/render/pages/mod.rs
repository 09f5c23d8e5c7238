//! Page renderers and the cards they share.

pub mod blog;
pub mod home;
pub mod not_found;
pub mod post;
pub mod projects;
pub mod redirect;

use super::{PageContext, Route};
use crate::{
    content::{BlogPost, Project},
    utils::html::{escape, escape_attr},
};
use std::fmt::Write;

/// Project card with its details dialog.
pub(crate) fn project_card(ctx: &PageContext<'_>, project: &Project) -> String {
    let t = ctx.t("Projects");
    let title = escape(&project.title);
    let description = escape_attr(&project.description(ctx.catalog)).into_owned();
    let dialog_id = format!("project-{}", crate::utils::slug::slugify(&project.id));

    let mut techs = String::new();
    for tech in &project.technologies {
        let _ = write!(
            techs,
            "<li><a class=\"tech\" href=\"{}\">{}</a></li>",
            escape_attr(&ctx.url(&Route::ProjectsByTech(tech.clone()))),
            escape(tech)
        );
    }

    let mut links = String::new();
    if !project.live_url.is_empty() {
        let _ = write!(
            links,
            "<a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" \
             aria-label=\"{} {title}\">{}</a>",
            escape_attr(&project.live_url),
            escape_attr(&t.t("viewLive")),
            escape(&t.t("viewLive"))
        );
    }
    if !project.github_url.is_empty() {
        let _ = write!(
            links,
            "<a class=\"button secondary\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" \
             aria-label=\"{} {title}\">{}</a>",
            escape_attr(&project.github_url),
            escape_attr(&t.t("viewCode")),
            escape(&t.t("viewCode"))
        );
    }

    let status = if project.featured {
        format!(
            "<p class=\"status\">{} · {}</p>",
            escape(&t.t("liveAndRunning")),
            escape(&t.t("featuredProject"))
        )
    } else {
        format!("<p class=\"status\">{}</p>", escape(&t.t("liveAndRunning")))
    };

    format!(
        "<article class=\"card project-card\" data-tech=\"{data_tech}\">\n\
         <button type=\"button\" class=\"card-open\" data-dialog=\"{dialog_id}\" \
         aria-label=\"{view} {title}\">\n\
         <img src=\"{image}\" alt=\"{title} {screenshot}\" loading=\"lazy\">\n\
         <span class=\"hint\">{click}</span>\n</button>\n\
         <h3>{title}</h3>\n<p>{description}</p>\n\
         <h4>{used}</h4>\n<ul class=\"techs\">{techs}</ul>\n\
         <div class=\"links\">{links}</div>\n\
         <dialog id=\"{dialog_id}\" class=\"project-dialog\" aria-labelledby=\"{dialog_id}-title\">\n\
         <button type=\"button\" class=\"dialog-close\" aria-label=\"{close}\">✕</button>\n\
         <img src=\"{image}\" alt=\"{title} {screenshot}\">\n\
         <h3 id=\"{dialog_id}-title\">{title}</h3>\n\
         <h4>{about}</h4>\n<p>{description}</p>\n\
         <h4>{used}</h4>\n<ul class=\"techs\">{techs}</ul>\n\
         <h4>{project_links}</h4>\n<div class=\"links\">{links}</div>\n\
         <h4>{status_label}</h4>\n{status}\n\
         </dialog>\n</article>\n",
        data_tech = escape_attr(&project.technologies.join("|")),
        view = escape_attr(&t.t("viewDetails")),
        image = escape_attr(&ctx.asset(&project.image)),
        screenshot = escape_attr(&t.t("projectScreenshot")),
        click = escape(&t.t("clickToViewDetails")),
        used = escape(&t.t("technologiesUsed")),
        close = escape_attr(&t.t("closeModal")),
        about = escape(&t.t("aboutProject")),
        project_links = escape(&t.t("projectLinks")),
        status_label = escape(&t.t("projectStatus")),
    )
}

/// Blog listing card. `data-search` carries the lowercased text the search
/// box filters on.
pub(crate) fn post_card(ctx: &PageContext<'_>, post: &BlogPost) -> String {
    let t = ctx.t("Blog");
    let title = post.title(ctx.catalog);
    let description = post.description(ctx.catalog);
    let search = format!("{} {}", title, description).to_lowercase();
    let href = ctx.url(&Route::Post(post.slug.clone()));
    let minutes = post.read_time.to_string();

    let mut tags = String::new();
    for tag in &post.tags {
        let _ = write!(
            tags,
            "<li><a class=\"tag\" href=\"{}\">{}</a></li>",
            escape_attr(&ctx.url(&Route::BlogTag(tag.clone()))),
            escape(tag)
        );
    }

    let mut cover = String::new();
    if !post.cover_image.is_empty() {
        cover = format!(
            "<a href=\"{}\" tabindex=\"-1\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></a>\n",
            escape_attr(&href),
            escape_attr(&ctx.asset(&post.cover_image)),
            escape_attr(&title)
        );
    }

    format!(
        "<article class=\"card post-card\" data-search=\"{search}\" data-tags=\"{data_tags}\">\n\
         {cover}<ul class=\"tags\">{tags}</ul>\n\
         <h3><a href=\"{href}\">{title}</a></h3>\n\
         <p>{description}</p>\n\
         <p class=\"meta\"><time datetime=\"{date}\">{long_date}</time> · {read}</p>\n\
         <a class=\"read-more\" href=\"{href}\">{more}</a>\n</article>\n",
        search = escape_attr(&search),
        data_tags = escape_attr(&post.tags.join("|")),
        href = escape_attr(&href),
        title = escape(&title),
        description = escape(&description),
        date = post.date,
        long_date = post.date.to_long_date(),
        read = escape(&t.t_with("readTime", &[("minutes", minutes.as_str())])),
        more = escape(&t.t("readMore")),
    )
}

/// Page heading block with a title and lead paragraph.
pub(crate) fn page_heading(id: &str, title: &str, lead: &str) -> String {
    format!(
        "<header class=\"page-heading\">\n<h1 id=\"{}\">{}</h1>\n<p>{}</p>\n</header>\n",
        escape_attr(id),
        escape(title),
        escape(lead)
    )
}
