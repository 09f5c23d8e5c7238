//! `[i18n]` section configuration.
//!
//! ```toml
//! [i18n]
//! locales = ["en", "ar"]   # every locale gets its own page tree
//! default = "en"           # target of the root redirect and catalog fallback
//! messages = "messages"    # directory holding <locale>.json catalogs
//! echo_guard = true        # treat key-shaped catalog values as missing
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::i18n::LocaleRouting;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub locales: Vec<String>,
    pub default: String,
    pub messages: PathBuf,
    pub echo_guard: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales: vec!["en".into(), "ar".into()],
            default: "en".into(),
            messages: "messages".into(),
            echo_guard: true,
        }
    }
}

impl I18nConfig {
    pub const LOCALES: FieldPath = FieldPath::new("i18n.locales");
    pub const DEFAULT: FieldPath = FieldPath::new("i18n.default");

    pub fn routing(&self) -> LocaleRouting {
        LocaleRouting::new(&self.locales, &self.default)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default.trim().is_empty() {
            diag.error(Self::DEFAULT, "default locale must not be empty");
        } else if !self.locales.is_empty() && !self.locales.contains(&self.default) {
            diag.warn(
                Self::DEFAULT,
                format!("`{}` is not listed in {}, adding it", self.default, Self::LOCALES),
            );
        }

        for locale in &self.locales {
            let valid = !locale.is_empty()
                && locale
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            if !valid {
                diag.error_with_hint(
                    Self::LOCALES,
                    format!("invalid locale code `{locale}`"),
                    "use codes like \"en\" or \"pt-BR\"",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.i18n.locales, ["en", "ar"]);
        assert_eq!(config.i18n.default, "en");
        assert!(config.i18n.echo_guard);
    }

    #[test]
    fn test_routing_puts_default_first() {
        let config = test_parse_config("[i18n]\nlocales = [\"ar\", \"en\"]\ndefault = \"ar\"");
        let routing = config.i18n.routing();
        assert_eq!(routing.default_locale(), "ar");
        assert_eq!(routing.locales(), ["ar", "en"]);
    }

    #[test]
    fn test_invalid_locale_code() {
        let config = test_parse_config("[i18n]\nlocales = [\"en\", \"a r\"]");
        let mut diag = ConfigDiagnostics::new();
        config.i18n.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_unlisted_default_warns() {
        let config = test_parse_config("[i18n]\nlocales = [\"ar\"]\ndefault = \"en\"");
        let mut diag = ConfigDiagnostics::new();
        config.i18n.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
