//! Project listing, optionally narrowed to one technology.

use super::{page_heading, project_card};
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

pub fn render(ctx: &PageContext<'_>, tech: Option<&str>) -> String {
    let t = ctx.t("Projects");
    let registry = &ctx.site.content.projects;
    let projects = registry.filter_by_tech(tech);

    let mut body = page_heading("projects-heading", &t.t("title"), &t.t("description"));

    let _ = write!(
        body,
        "<nav class=\"filters\" aria-label=\"{}\">\n<ul>\n",
        escape_attr(&t.t_or("filterByTech", "Filter by technology"))
    );
    let _ = writeln!(
        body,
        "<li>{}</li>",
        filter_link(ctx, &Route::Projects, &t.t("allProjects"), tech.is_none())
    );
    for technology in registry.technologies() {
        let route = Route::ProjectsByTech(technology.to_string());
        let _ = writeln!(
            body,
            "<li>{}</li>",
            filter_link(ctx, &route, technology, tech == Some(technology))
        );
    }
    body.push_str("</ul>\n</nav>\n");

    let count = projects.len().to_string();
    let showing = t
        .get("showingProjects")
        .map(|template| crate::i18n::catalog::interpolate(template, &[("count", count.as_str())]))
        .unwrap_or_else(|| format!("Showing {}", plural_count(projects.len(), "project")));
    let _ = writeln!(
        body,
        "<p class=\"count\" role=\"status\">{}</p>\n<div class=\"grid\">",
        escape(&showing)
    );
    for project in &projects {
        body.push_str(&project_card(ctx, project));
    }
    body.push_str("</div>\n");

    let route = tech.map_or(Route::Projects, |tech| Route::ProjectsByTech(tech.to_string()));
    let title = match tech {
        Some(tech) => format!("{} · {tech}", t.t("title")),
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

/// Filter link, marked current when `active`.
pub(crate) fn filter_link(ctx: &PageContext<'_>, route: &Route, label: &str, active: bool) -> String {
    let current = if active { " aria-current=\"page\"" } else { "" };
    format!(
        "<a class=\"filter\" href=\"{}\"{current}>{}</a>",
        escape_attr(&ctx.url(route)),
        escape(label)
    )
}
