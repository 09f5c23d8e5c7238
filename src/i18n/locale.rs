//! Locale routing: which locales exist, how URLs carry them, text direction.
//!
//! Every page lives under a locale prefix (`/en/blog/`, `/ar/blog/`).
//! Unlocalized paths in this module always start with `/`.

/// Writing direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Primary language subtags written right-to-left.
const RTL_LANGUAGES: &[&str] = &["ar", "fa", "he", "ur"];

/// Supported locales and the default one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRouting {
    locales: Vec<String>,
    default: String,
}

impl LocaleRouting {
    /// The default locale is moved to the front of the list if present,
    /// and added there if missing.
    pub fn new(locales: &[String], default: &str) -> Self {
        let mut ordered = vec![default.to_string()];
        for locale in locales {
            if !ordered.contains(locale) {
                ordered.push(locale.clone());
            }
        }
        Self {
            locales: ordered,
            default: default.to_string(),
        }
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn default_locale(&self) -> &str {
        &self.default
    }

    pub fn is_supported(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    /// Requested locale if supported, otherwise the default.
    pub fn resolve<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(locale) if self.is_supported(locale) => locale,
            _ => &self.default,
        }
    }

    pub fn direction(locale: &str) -> Direction {
        let lang = locale.split(['-', '_']).next().unwrap_or(locale);
        if RTL_LANGUAGES.contains(&lang) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// `/blog/` under `ar` → `/ar/blog/`. The root path maps to `/ar/`.
    pub fn localized_path(locale: &str, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("/{locale}/{path}")
    }

    /// Split a browser path into its locale and the unlocalized rest.
    ///
    /// `/ar/blog/x/` → `Some(("ar", "/blog/x/"))`; `/blog/` → `None`.
    pub fn split_path<'p>(&self, path: &'p str) -> Option<(&'p str, &'p str)> {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let (first, rest) = match trimmed.find('/') {
            Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
            None => (trimmed, "/"),
        };
        self.is_supported(first).then_some((first, rest))
    }

    /// Same page in another locale, as the language switcher links it.
    pub fn switch_path(&self, path: &str, target: &str) -> String {
        let rest = self.split_path(path).map_or(path, |(_, rest)| rest);
        Self::localized_path(target, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routing() -> LocaleRouting {
        LocaleRouting::new(&["en".into(), "ar".into()], "en")
    }

    #[test]
    fn test_default_first() {
        let routing = LocaleRouting::new(&["ar".into(), "en".into()], "en");
        assert_eq!(routing.locales(), ["en", "ar"]);

        let routing = LocaleRouting::new(&["ar".into(), "fr".into(), "ar".into()], "en");
        assert_eq!(routing.locales(), ["en", "ar", "fr"]);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let routing = routing();
        assert_eq!(routing.resolve(Some("ar")), "ar");
        assert_eq!(routing.resolve(Some("fr")), "en");
        assert_eq!(routing.resolve(None), "en");
    }

    #[test]
    fn test_direction() {
        assert_eq!(LocaleRouting::direction("ar"), Direction::Rtl);
        assert_eq!(LocaleRouting::direction("ar-EG"), Direction::Rtl);
        assert_eq!(LocaleRouting::direction("en"), Direction::Ltr);
        assert_eq!(Direction::Rtl.as_str(), "rtl");
    }

    #[test]
    fn test_localized_path() {
        assert_eq!(LocaleRouting::localized_path("en", "/"), "/en/");
        assert_eq!(LocaleRouting::localized_path("ar", "/blog/"), "/ar/blog/");
        assert_eq!(LocaleRouting::localized_path("ar", "projects/"), "/ar/projects/");
    }

    #[test]
    fn test_split_path() {
        let routing = routing();
        assert_eq!(routing.split_path("/ar/blog/x/"), Some(("ar", "/blog/x/")));
        assert_eq!(routing.split_path("/en"), Some(("en", "/")));
        assert_eq!(routing.split_path("/en/"), Some(("en", "/")));
        assert_eq!(routing.split_path("/blog/"), None);
        assert_eq!(routing.split_path("/"), None);
    }

    #[test]
    fn test_switch_path() {
        let routing = routing();
        assert_eq!(routing.switch_path("/en/blog/post/", "ar"), "/ar/blog/post/");
        assert_eq!(routing.switch_path("/en", "ar"), "/ar/");
        assert_eq!(routing.switch_path("/about/", "ar"), "/ar/about/");
    }
}
