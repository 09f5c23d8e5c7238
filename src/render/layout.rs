//! Document shell shared by every page.

use super::{PageContext, Route, state::ThemeMode};
use crate::{
    embed::site::{SCRIPT_PATH, STYLESHEET_PATH, THEME_INIT_JS, ThemeInitVars},
    i18n::{LocaleRouting, Translator},
    utils::html::{escape, escape_attr},
};
use std::fmt::Write;

/// Header navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Projects,
    Blog,
    Contact,
}

impl NavItem {
    pub const ALL: [Self; 4] = [Self::Home, Self::Projects, Self::Blog, Self::Contact];

    /// Key under the `Navigation` namespace.
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }

    fn href(self, ctx: &PageContext<'_>) -> String {
        match self {
            Self::Home => ctx.url(&Route::Home),
            Self::Projects => ctx.url(&Route::Projects),
            Self::Blog => ctx.url(&Route::Blog),
            Self::Contact => format!("{}#contact", ctx.url(&Route::Home)),
        }
    }
}

/// Display name of a locale in its own language.
pub fn native_name(locale: &str) -> &str {
    match locale {
        "en" => "English",
        "ar" => "العربية",
        "fr" => "Français",
        "de" => "Deutsch",
        "es" => "Español",
        other => other,
    }
}

/// Page content handed to the shell.
pub struct Document<'a> {
    pub route: &'a Route,
    pub title: &'a str,
    pub description: &'a str,
    pub body: String,
}

/// Wrap `doc.body` in the full HTML document.
pub fn render(ctx: &PageContext<'_>, doc: Document<'_>) -> String {
    let config = &ctx.site.config;
    let site_title = &config.site.title;
    let title = if doc.title.is_empty() || doc.title == site_title {
        site_title.to_string()
    } else {
        format!("{} | {}", doc.title, site_title)
    };
    let dir = LocaleRouting::direction(ctx.locale);
    let theme_init = THEME_INIT_JS.render(&ThemeInitVars::default());

    let mut html = String::with_capacity(doc.body.len() + 4096);
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"{lang}\" dir=\"{dir}\" data-theme=\"{theme}\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <meta name=\"description\" content=\"{description}\">\n\
         <meta name=\"author\" content=\"{author}\">\n",
        lang = escape_attr(ctx.locale),
        dir = dir.as_str(),
        theme = config.theme.default,
        title = escape(&title),
        description = escape_attr(doc.description),
        author = escape_attr(&config.site.author),
    );
    for locale in ctx.site.routing.locales() {
        let _ = writeln!(
            html,
            "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">",
            escape_attr(locale),
            escape_attr(&ctx.url_in(locale, doc.route))
        );
    }
    if config.build.feed.enable {
        let _ = writeln!(
            html,
            "<link rel=\"alternate\" type=\"{}\" href=\"{}\">",
            feed_mime(config.build.feed.format),
            escape_attr(&config.url_for(&config.build.feed.path.to_string_lossy()))
        );
    }
    let _ = write!(
        html,
        "<link rel=\"stylesheet\" href=\"{css}\">\n<script>{theme_init}</script>\n</head>\n<body>\n",
        css = escape_attr(&ctx.asset(STYLESHEET_PATH)),
    );

    html.push_str(&header(ctx, doc.route));
    html.push_str("<main id=\"main\">\n");
    html.push_str(&doc.body);
    html.push_str("</main>\n");
    html.push_str(&footer(ctx));
    let _ = write!(
        html,
        "<script src=\"{}\" defer></script>\n</body>\n</html>\n",
        escape_attr(&ctx.asset(SCRIPT_PATH))
    );
    html
}

fn feed_mime(format: crate::config::FeedFormat) -> &'static str {
    use crate::utils::mime::types::{ATOM, RSS};
    match format {
        crate::config::FeedFormat::Rss => RSS,
        crate::config::FeedFormat::Atom => ATOM,
    }
}

fn nav_links(ctx: &PageContext<'_>, active: NavItem, class: &str) -> String {
    let t = ctx.t("Navigation");
    let mut out = String::new();
    for item in NavItem::ALL {
        let current = if item == active {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<li><a class=\"{class}\" href=\"{}\"{current}>{}</a></li>",
            escape_attr(&item.href(ctx)),
            escape(&t.t_or(item.label_key(), &super::theme::humanize(item.label_key())))
        );
    }
    out
}

/// Links to the current page in every other locale.
fn language_switch(ctx: &PageContext<'_>, route: &Route) -> String {
    let label = ctx
        .t("LanguageSelector")
        .t_or("selectLanguage", "Select language");
    let mut out = format!(
        "<ul class=\"language-switch\" aria-label=\"{}\">\n",
        escape_attr(&label)
    );
    for locale in ctx.site.routing.locales() {
        let current = if locale == ctx.locale {
            " aria-current=\"true\""
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<li><a href=\"{}\" hreflang=\"{}\" lang=\"{}\"{current}>{}</a></li>",
            escape_attr(&ctx.url_in(locale, route)),
            escape_attr(locale),
            escape_attr(locale),
            escape(native_name(locale))
        );
    }
    out.push_str("</ul>\n");
    out
}

/// Label of the theme toggle when pressing it switches to `target`.
fn theme_label(t: &Translator<'_>, target: ThemeMode) -> String {
    match target {
        ThemeMode::Light => t.t_or("switchToLight", "Switch to light theme"),
        ThemeMode::Dark => t.t_or("switchToDark", "Switch to dark theme"),
    }
}

fn header(ctx: &PageContext<'_>, route: &Route) -> String {
    let t = ctx.t("Navigation");
    let active = route.nav();
    let mut out = String::with_capacity(2048);
    let _ = write!(
        out,
        "<header class=\"site-header\">\n\
         <a class=\"brand\" href=\"{home}\" aria-label=\"{home_label}\">{brand}</a>\n\
         <nav aria-label=\"{main_nav}\"><ul class=\"nav\">\n{links}</ul></nav>\n\
         <div class=\"header-tools\">\n\
         <button type=\"button\" id=\"theme-toggle\" class=\"theme-toggle\" aria-label=\"{theme}\" \
         data-label-light=\"{to_light}\" data-label-dark=\"{to_dark}\">◐</button>\n\
         {switch}\
         <button type=\"button\" id=\"menu-toggle\" class=\"menu-toggle\" aria-expanded=\"false\" \
         aria-controls=\"mobile-menu\" data-open-label=\"{open}\" data-close-label=\"{close}\" \
         aria-label=\"{open}\">☰</button>\n\
         </div>\n\
         <div id=\"mobile-menu\" class=\"mobile-menu\" role=\"dialog\" aria-modal=\"true\" \
         aria-label=\"{mobile}\" hidden>\n\
         <button type=\"button\" class=\"menu-close\" aria-label=\"{close}\">✕</button>\n\
         <nav aria-label=\"{mobile_nav}\"><ul>\n{mobile_links}</ul></nav>\n\
         </div>\n</header>\n",
        home = escape_attr(&ctx.url(&Route::Home)),
        home_label = escape_attr(&t.t_or("homeLabel", "Go to homepage")),
        brand = escape(&ctx.site.config.site.title),
        main_nav = escape_attr(&t.t_or("mainNavigation", "Main navigation")),
        links = nav_links(ctx, active, "nav-link"),
        theme = escape_attr(&theme_label(&t, ctx.site.config.theme.default.toggled())),
        to_light = escape_attr(&theme_label(&t, ThemeMode::Light)),
        to_dark = escape_attr(&theme_label(&t, ThemeMode::Dark)),
        switch = language_switch(ctx, route),
        open = escape_attr(&t.t_or("openMenu", "Open menu")),
        close = escape_attr(&t.t_or("closeMenu", "Close menu")),
        mobile = escape_attr(&t.t_or("mobileMenu", "Mobile navigation menu")),
        mobile_nav = escape_attr(&t.t_or("mobileNavigation", "Mobile navigation")),
        mobile_links = nav_links(ctx, active, "mobile-link"),
    );
    out
}

fn footer(ctx: &PageContext<'_>) -> String {
    let site = &ctx.site.config.site;
    format!(
        "<footer class=\"site-footer\"><p>© {}</p></footer>\n",
        escape(if site.author.is_empty() {
            &site.title
        } else {
            &site.author
        })
    )
}
