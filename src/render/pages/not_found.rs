//! The `/404.html` page, rendered in the default locale.

use super::page_heading;
use crate::render::{
    PageContext, RenderedPage, Route, Site,
    layout::{self, Document},
};
use crate::utils::html::{escape, escape_attr};

pub const NOT_FOUND_URL: &str = "/404.html";

pub fn render(ctx: &PageContext<'_>) -> String {
    let t = ctx.t("NotFound");
    let title = t.t_or("title", "Page not found");
    let mut body = page_heading(
        "not-found-heading",
        &title,
        &t.t_or("description", "The page you are looking for does not exist."),
    );
    body.push_str(&format!(
        "<p><a class=\"button\" href=\"{}\">{}</a></p>\n",
        escape_attr(&ctx.url(&Route::Home)),
        escape(&t.t_or("backHome", "Back to home"))
    ));

    layout::render(
        ctx,
        Document {
            route: &Route::Home,
            title: &title,
            description: "",
            body,
        },
    )
}

pub fn render_page(site: &Site) -> RenderedPage {
    let locale = site.routing.default_locale();
    RenderedPage {
        url: NOT_FOUND_URL.to_string(),
        locale: Some(locale.to_string()),
        html: render(&site.context(locale)),
        lastmod: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::site;

    #[test]
    fn test_not_found_page() {
        let site = site();
        let page = render_page(&site);
        assert_eq!(page.url, "/404.html");
        assert!(page.html.contains("lang=\"en\""));
        assert!(page.html.contains("Page not found"));
        assert!(page.html.contains("href=\"/en/\""));
    }
}
