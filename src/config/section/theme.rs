//! `[theme]` section configuration.

use crate::render::state::ThemeMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Mode rendered before the toggle script reads the stored preference.
    pub default: ThemeMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_theme_default() {
        assert_eq!(test_parse_config("").theme.default, ThemeMode::Light);
        let config = test_parse_config("[theme]\ndefault = \"dark\"");
        assert_eq!(config.theme.default, ThemeMode::Dark);
    }

    #[test]
    fn test_theme_default_trimmed_and_validated() {
        let config = test_parse_config("[theme]\ndefault = \" dark \"");
        assert_eq!(config.theme.default, ThemeMode::Dark);

        let result: Result<ThemeSectionConfig, _> = toml::from_str("default = \"sepia\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown theme `sepia`"), "{err}");
    }
}
