//! Landing page: hero, skills, education, featured projects, testimonials
//! and the contact section.

use super::project_card;
use crate::{
    content::project::FEATURED_LIMIT,
    render::{
        PageContext, Route,
        layout::{self, Document},
        state::{CAROUSEL_INTERVAL_MS, Carousel},
    },
    utils::html::{escape, escape_attr},
};
use serde::Deserialize;
use std::fmt::Write;

pub const SKILL_CATEGORIES: [&str; 3] = ["frontend", "backend", "tools"];
pub const EDUCATION_ENTRIES: [&str; 2] = ["almdrasa", "zagazig"];

#[derive(Debug, Deserialize)]
struct SkillCategory {
    title: String,
    #[serde(default)]
    skills: Vec<Skill>,
}

#[derive(Debug, Deserialize)]
struct Skill {
    name: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct Review {
    name: String,
    #[serde(default)]
    role: String,
    opinion: String,
    #[serde(default)]
    avatar: String,
}

/// Deserialize a structured catalog value, treating a mismatch as absent.
fn structured<T: serde::de::DeserializeOwned>(ctx: &PageContext<'_>, path: &str) -> Option<T> {
    let value = ctx.catalog.raw(path)?;
    T::deserialize(value).ok()
}

pub fn render(ctx: &PageContext<'_>) -> String {
    let mut body = String::with_capacity(16 * 1024);
    body.push_str(&hero(ctx));
    body.push_str(&skills(ctx));
    body.push_str(&education(ctx));
    body.push_str(&featured_projects(ctx));
    body.push_str(&testimonials(ctx));
    body.push_str(&contact(ctx));

    let hero = ctx.t("Hero");
    layout::render(
        ctx,
        Document {
            route: &Route::Home,
            title: &ctx.site.config.site.title,
            description: &hero.t_or("summary", &ctx.site.config.site.description),
            body,
        },
    )
}

fn hero(ctx: &PageContext<'_>) -> String {
    let t = ctx.t("Hero");
    let site = &ctx.site.config.site;
    let name = t.t_or("name", &site.author);

    let mut actions = format!(
        "<a class=\"button\" href=\"{}\">{}</a>\n",
        escape_attr(&ctx.url(&Route::Projects)),
        escape(&t.t("viewProjects"))
    );
    if let Some(resume) = &site.resume {
        let _ = writeln!(
            actions,
            "<a class=\"button secondary\" href=\"{}\" download aria-label=\"{}\">{}</a>",
            escape_attr(&ctx.asset(resume)),
            escape_attr(&t.t_or("downloadCVAria", "Download CV as PDF")),
            escape(&t.t("downloadCV"))
        );
    }
    let _ = writeln!(
        actions,
        "<a class=\"button secondary\" href=\"#contact\">{}</a>",
        escape(&t.t("contact"))
    );

    let portrait = site.avatar.as_deref().map_or_else(String::new, |avatar| {
        format!(
            "<img class=\"portrait\" src=\"{}\" alt=\"{}\">\n",
            escape_attr(&ctx.asset(avatar)),
            escape_attr(&t.t_or(
                "profileImageAlt",
                &format!("{name} - Professional profile photo")
            ))
        )
    });

    format!(
        "<section class=\"hero\" aria-labelledby=\"hero-heading\">\n\
         <div>\n<h1 id=\"hero-heading\">{}</h1>\n<p class=\"lead\">{}</p>\n\
         <div class=\"actions\" aria-label=\"{}\">\n{actions}</div>\n</div>\n{portrait}</section>\n",
        escape(&name),
        escape(&t.t("summary")),
        escape_attr(&t.t_or("ctaButtons", "Actions")),
    )
}

fn skills(ctx: &PageContext<'_>) -> String {
    let t = ctx.t("Skills");
    let mut out = format!(
        "<section id=\"skills\" class=\"skills\" aria-labelledby=\"skills-heading\">\n\
         <h2 id=\"skills-heading\">{}</h2>\n<p>{}</p>\n<div class=\"grid\">\n",
        escape(&t.t("title")),
        escape(&t.t("subtitle"))
    );

    for key in SKILL_CATEGORIES {
        let Some(category) = structured::<SkillCategory>(ctx, &format!("Skills.{key}")) else {
            continue;
        };
        let _ = write!(
            out,
            "<article class=\"card skill-category\" aria-labelledby=\"skill-category-{key}\">\n\
             <h3 id=\"skill-category-{key}\">{}</h3>\n<ul class=\"skill-list\">\n",
            escape(&category.title)
        );
        for skill in &category.skills {
            let icon = if skill.icon.is_empty() {
                String::new()
            } else {
                format!(
                    "<img src=\"{}\" alt=\"{} icon\" width=\"32\" height=\"32\">",
                    escape_attr(&ctx.asset(&format!("/skills/{}.svg", skill.icon))),
                    escape_attr(&skill.name)
                )
            };
            let _ = writeln!(out, "<li>{icon}<span>{}</span></li>", escape(&skill.name));
        }
        out.push_str("</ul>\n</article>\n");
    }

    out.push_str("</div>\n</section>\n");
    out
}

fn education(ctx: &PageContext<'_>) -> String {
    let t = ctx.t("Education");
    let mut entries = String::new();
    for key in EDUCATION_ENTRIES {
        let Some(institution) = t.get(&format!("{key}.institution")).filter(|s| !s.is_empty())
        else {
            continue;
        };
        let field = |name: &str| t.get(&format!("{key}.{name}")).unwrap_or_default();
        let _ = write!(
            entries,
            "<li class=\"timeline-entry\">\n<h3>{}</h3>\n<p class=\"degree\">{}</p>\n\
             <p class=\"duration\">{}</p>\n<p>{}</p>\n</li>\n",
            escape(institution),
            escape(field("degree")),
            escape(field("duration")),
            escape(field("details"))
        );
    }

    if entries.is_empty() {
        return String::new();
    }
    format!(
        "<section id=\"education\" class=\"education\" aria-labelledby=\"education-heading\">\n\
         <h2 id=\"education-heading\">{}</h2>\n<ol class=\"timeline\">\n{entries}</ol>\n</section>\n",
        escape(&t.t("title"))
    )
}

fn featured_projects(ctx: &PageContext<'_>) -> String {
    let t = ctx.t("Projects");
    let featured = ctx.site.content.projects.featured(FEATURED_LIMIT);
    let mut cards = String::new();
    for project in featured {
        cards.push_str(&project_card(ctx, project));
    }

    format!(
        "<section id=\"projects\" class=\"projects\" aria-labelledby=\"projects-heading\">\n\
         <h2 id=\"projects-heading\">{}</h2>\n<p>{}</p>\n<div class=\"grid\">\n{cards}</div>\n\
         <a class=\"button\" href=\"{}\">{}</a>\n</section>\n",
        escape(&t.t("title")),
        escape(&t.t("description")),
        escape_attr(&ctx.url(&Route::Projects)),
        escape(&t.t("viewAllProjects"))
    )
}

fn testimonials(ctx: &PageContext<'_>) -> String {
    let t = ctx.t("Testimonials");
    let reviews: Vec<Review> = structured(ctx, "Testimonials.reviews").unwrap_or_default();
    let carousel = Carousel::new(reviews.len());
    if carousel.is_empty() {
        return String::new();
    }

    let mut cursor = carousel;
    let mut slides = String::new();
    for review in &reviews {
        let index = cursor.index();
        cursor.advance();
        let next = cursor.index();
        let hidden = if carousel.is_active(index) { "" } else { " hidden" };
        let avatar = if review.avatar.is_empty() {
            String::new()
        } else {
            format!(
                "<img src=\"{}\" alt=\"{}\" width=\"40\" height=\"40\">",
                escape_attr(&ctx.asset(&review.avatar)),
                escape_attr(&review.name)
            )
        };
        let _ = write!(
            slides,
            "<figure class=\"slide\" data-index=\"{index}\" data-next=\"{next}\"{hidden}>\n\
             <blockquote><p>&quot;{}&quot;</p></blockquote>\n\
             <figcaption>{avatar}<span class=\"name\">{}</span> <span class=\"role\">{}</span></figcaption>\n\
             </figure>\n",
            escape(&review.opinion),
            escape(&review.name),
            escape(&review.role)
        );
    }

    format!(
        "<section id=\"testimonials\" class=\"testimonials\" aria-labelledby=\"testimonials-heading\">\n\
         <h2 id=\"testimonials-heading\">{}</h2>\n<p>{}</p>\n\
         <div class=\"carousel\" data-carousel data-interval=\"{CAROUSEL_INTERVAL_MS}\" \
         data-length=\"{}\" aria-live=\"polite\">\n{slides}</div>\n</section>\n",
        escape(&t.t("title")),
        escape(&t.t("description")),
        carousel.len()
    )
}

fn contact(ctx: &PageContext<'_>) -> String {
    let t = ctx.t("Contact");
    let site = &ctx.site.config.site;

    let field = |name: &str, kind: &str| {
        let input = if kind == "textarea" {
            format!(
                "<textarea id=\"contact-{name}\" name=\"{name}\" rows=\"5\" placeholder=\"{}\" \
                 aria-describedby=\"contact-{name}-error\"></textarea>",
                escape_attr(&t.t(&format!("form.{name}Placeholder")))
            )
        } else {
            format!(
                "<input id=\"contact-{name}\" name=\"{name}\" type=\"{kind}\" placeholder=\"{}\" \
                 aria-describedby=\"contact-{name}-error\">",
                escape_attr(&t.t(&format!("form.{name}Placeholder")))
            )
        };
        format!(
            "<div class=\"field\">\n<label for=\"contact-{name}\">{}</label>\n{input}\n\
             <p id=\"contact-{name}-error\" class=\"field-error\" role=\"alert\"></p>\n</div>\n",
            escape(&t.t(&format!("form.{name}")))
        )
    };

    let mut info = String::new();
    let email = t.get("info.email").unwrap_or(site.email.as_str());
    if !email.is_empty() {
        let _ = writeln!(
            info,
            "<li><span>{}</span> <a href=\"mailto:{}\">{}</a></li>",
            escape(&t.t("info.emailLabel")),
            escape_attr(email),
            escape(email)
        );
    }
    if let Some(phone) = t.get("info.phone").filter(|p| !p.is_empty()) {
        let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        let _ = writeln!(
            info,
            "<li><span>{}</span> <a href=\"https://wa.me/{}\" target=\"_blank\" \
             rel=\"noopener noreferrer\">{}</a></li>",
            escape(&t.t("info.phoneLabel")),
            escape_attr(&digits),
            escape(phone)
        );
    }
    if let Some(location) = t.get("info.location").filter(|l| !l.is_empty()) {
        let _ = writeln!(
            info,
            "<li><span>{}</span> {}</li>",
            escape(&t.t("info.locationLabel")),
            escape(location)
        );
    }

    let mut social = String::new();
    for (url, key) in [
        (&site.github, "social.followOnGithub"),
        (&site.linkedin, "social.connectOnLinkedin"),
    ] {
        if let Some(url) = url {
            let _ = writeln!(
                social,
                "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>",
                escape_attr(url),
                escape(&t.t(key))
            );
        }
    }

    format!(
        "<section id=\"contact\" class=\"contact\" aria-labelledby=\"contact-heading\">\n\
         <h2 id=\"contact-heading\">{title}</h2>\n<p>{description}</p>\n\
         <form class=\"contact-form\" action=\"{action}\" method=\"post\" novalidate \
         aria-label=\"{form_label}\" data-locale=\"{locale}\" \
         data-success=\"{success}\" data-error=\"{error}\" data-sending=\"{sending}\">\n\
         {name}{email_field}{subject}{message}\
         <p class=\"form-status\" role=\"status\"></p>\n\
         <button type=\"submit\" aria-label=\"{submit_label}\">{send}</button>\n</form>\n\
         <aside class=\"contact-info\">\n<ul>\n{info}</ul>\n\
         <p>{availability}</p>\n<p>{response_time}</p>\n\
         <h3>{social_title}</h3>\n<ul class=\"social\">\n{social}</ul>\n</aside>\n</section>\n",
        title = escape(&t.t("title")),
        description = escape(&t.t("description")),
        action = escape_attr(&ctx.site.config.url_for(crate::contact::CONTACT_ENDPOINT)),
        form_label = escape_attr(&t.t("form.formLabel")),
        locale = escape_attr(ctx.locale),
        success = escape_attr(&t.t("form.success")),
        error = escape_attr(&t.t("form.error")),
        sending = escape_attr(&t.t("form.sending")),
        name = field("name", "text"),
        email_field = field("email", "email"),
        subject = field("subject", "text"),
        message = field("message", "textarea"),
        submit_label = escape_attr(&t.t("form.submitLabel")),
        send = escape(&t.t("form.send")),
        availability = escape(&t.t("info.availability")),
        response_time = escape(&t.t("info.responseTime")),
        social_title = escape(&t.t("social.title")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::site;

    #[test]
    fn test_home_sections() {
        let site = site();
        let html = render(&site.context("en"));
        assert!(html.contains("<h1 id=\"hero-heading\">Sara</h1>"));
        assert!(html.contains("<section id=\"contact\""));
        assert!(html.contains("<h3>Marketio</h3>"));
        assert!(html.contains("name=\"email\" type=\"email\""));
    }

    #[test]
    fn test_missing_structured_sections_are_dropped() {
        let site = site();
        let html = render(&site.context("en"));
        assert!(!html.contains("class=\"skill-category\""));
        assert!(!html.contains("id=\"testimonials\""));
        assert!(!html.contains("id=\"education\""));
    }

    #[test]
    fn test_skills_testimonials_education() {
        use crate::{
            content::ContentRegistry,
            i18n::{Catalog, Messages},
            render::Site,
        };
        use serde_json::json;

        let catalog = Catalog::from_value(
            "en",
            json!({
                "Skills": {
                    "title": "Skills",
                    "frontend": { "title": "Frontend", "skills": [{ "name": "React", "icon": "react" }] },
                    "backend": "not a category"
                },
                "Education": {
                    "almdrasa": { "institution": "Almdrasa", "degree": "Frontend Track" },
                    "zagazig": { "degree": "No institution" }
                },
                "Testimonials": { "reviews": [
                    { "name": "Omar", "role": "PM", "opinion": "Great work", "avatar": "/omar.jpg" },
                    { "name": "Mona", "role": "CTO", "opinion": "Reliable" }
                ] }
            }),
        )
        .unwrap();
        let site = Site::from_parts(
            crate::config::test_parse_config(""),
            Messages::from_catalogs(vec![catalog], "en").unwrap(),
            ContentRegistry::default(),
        );
        let html = render(&site.context("en"));

        assert!(html.contains("<h3 id=\"skill-category-frontend\">Frontend</h3>"));
        assert!(html.contains("src=\"/skills/react.svg\""));
        assert!(!html.contains("skill-category-backend"));

        assert!(html.contains("<h3>Almdrasa</h3>"));
        assert!(!html.contains("No institution"));

        assert!(html.contains("data-interval=\"4000\" data-length=\"2\""));
        assert!(html.contains("<figure class=\"slide\" data-index=\"0\" data-next=\"1\">"));
        assert!(html.contains("<figure class=\"slide\" data-index=\"1\" data-next=\"0\" hidden>"));
    }
}
