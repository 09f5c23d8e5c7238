//! The site root, which sends visitors to the default locale.

use crate::{
    embed::build::{REDIRECT_HTML, RedirectVars},
    i18n::LocaleRouting,
    render::{RenderedPage, Site},
};

pub fn render_page(site: &Site) -> RenderedPage {
    let target = site
        .config
        .url_for(&LocaleRouting::localized_path(site.routing.default_locale(), "/"));
    RenderedPage {
        url: "/".to_string(),
        locale: None,
        html: REDIRECT_HTML.render(&RedirectVars {
            canonical_url: &target,
        }),
        lastmod: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::site;

    #[test]
    fn test_root_redirect() {
        let page = render_page(&site());
        assert_eq!(page.url, "/");
        assert!(page.locale.is_none());
        assert!(page.html.contains("url=/en/"));
        assert!(!page.html.contains("__CANONICAL_URL__"));
    }
}
