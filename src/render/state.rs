//! UI state owned by the rendered page.
//!
//! Pages are static, so interactive state lives in the inline script. These
//! types are the server-side models of that state: they fix the initial
//! values written into the markup and define the transitions the script
//! mirrors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Testimonial rotation period, in milliseconds.
pub const CAROUSEL_INTERVAL_MS: u32 = 4000;

/// Index into a fixed-length rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub const fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// Move to the next item, wrapping at the end. No-op when empty.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Whether `index` is the visible item.
    pub const fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.index
    }
}

/// Color mode, persisted by the page script under `localStorage["theme"]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const STORAGE_KEY: &str = "theme";

    /// Parse a stored value; anything unrecognized yields `None`.
    pub fn parse(stored: &str) -> Option<Self> {
        match stored.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl TryFrom<String> for ThemeMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
            .ok_or_else(|| format!("unknown theme `{value}`, expected `light` or `dark`"))
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_wraps() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.is_active(0));
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.index(), 2);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_active(0));
        assert!(carousel.is_empty());
    }

    #[test]
    fn test_theme_mode() {
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("sepia"), None);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().to_string(), "light");
    }
}
