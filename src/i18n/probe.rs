//! Presence probes against a catalog.
//!
//! A probe asks "does this key carry real, displayable text?". The catalog
//! answers presence explicitly, so a missing key is simply `Absent`. A found
//! value can still be a placeholder: catalogs exported from tools that write
//! the key itself (or a path) in place of a missing translation. The echo
//! guard classifies such values as `Echoed`:
//!
//! - the value equals the key (relative or namespaced), or
//! - the value contains the namespace prefix (`"BlogPosts."`), or
//! - the value contains the content sub-namespace marker (`".content."`).
//!
//! Known limitation: genuine text containing `".content."` is classified as
//! `Echoed` while the guard is on. `[i18n] echo_guard = false` turns it off.

use super::{Lookup, Translator};

/// Marker of the per-post content sub-namespace.
pub const CONTENT_MARKER: &str = ".content.";

/// Outcome of probing one dotted key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// Real translated text.
    Present(String),
    /// Missing, empty, or not a string.
    Absent,
    /// A key-shaped placeholder instead of a translation.
    Echoed,
}

impl Probe {
    /// Text of a `Present` probe; nothing else is surfaced.
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Present(text) => Some(text),
            Self::Absent | Self::Echoed => None,
        }
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Probes keys of one catalog namespace.
#[derive(Debug, Clone, Copy)]
pub struct Prober<'a> {
    translator: Translator<'a>,
    echo_guard: bool,
}

impl<'a> Prober<'a> {
    pub const fn new(translator: Translator<'a>, echo_guard: bool) -> Self {
        Self {
            translator,
            echo_guard,
        }
    }

    /// Probe a key relative to the namespace.
    pub fn probe(&self, key: &str) -> Probe {
        match self.translator.lookup(key) {
            Lookup::Found("") => Probe::Absent,
            Lookup::Found(text) => {
                if self.echo_guard && self.is_echoed(key, text) {
                    Probe::Echoed
                } else {
                    Probe::Present(text.to_string())
                }
            }
            Lookup::NotText(_) | Lookup::NotFound => Probe::Absent,
        }
    }

    fn is_echoed(&self, key: &str, value: &str) -> bool {
        let namespace = self.translator.namespace();
        value == key
            || value == self.translator.full_key(key)
            || (!namespace.is_empty() && value.contains(&format!("{namespace}.")))
            || value.contains(CONTENT_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::from_value(
            "en",
            json!({
                "BlogPosts": {
                    "post": {
                        "title": "Binary",
                        "empty": "",
                        "self": "post.self",
                        "full": "BlogPosts.post.full",
                        "path": "see x.content.y",
                        "nested": { "a": "b" },
                        "dotted": "Version 1.2 is out."
                    }
                }
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_present_and_absent() {
        let catalog = catalog();
        let prober = Prober::new(catalog.namespace("BlogPosts"), true);
        assert_eq!(prober.probe("post.title"), Probe::Present("Binary".into()));
        assert_eq!(prober.probe("post.missing"), Probe::Absent);
        assert_eq!(prober.probe("post.empty"), Probe::Absent);
        assert_eq!(prober.probe("post.nested"), Probe::Absent);
    }

    #[test]
    fn test_echo_shapes() {
        let catalog = catalog();
        let prober = Prober::new(catalog.namespace("BlogPosts"), true);
        assert_eq!(prober.probe("post.self"), Probe::Echoed);
        assert_eq!(prober.probe("post.full"), Probe::Echoed);
        assert_eq!(prober.probe("post.path"), Probe::Echoed);
        assert_eq!(
            prober.probe("post.dotted"),
            Probe::Present("Version 1.2 is out.".into())
        );
    }

    #[test]
    fn test_guard_disabled_keeps_key_shaped_text() {
        let catalog = catalog();
        let prober = Prober::new(catalog.namespace("BlogPosts"), false);
        assert_eq!(prober.probe("post.path"), Probe::Present("see x.content.y".into()));
        assert_eq!(prober.probe("post.missing"), Probe::Absent);
    }

    #[test]
    fn test_only_present_surfaces_text() {
        assert_eq!(Probe::Present("a".into()).into_text(), Some("a".into()));
        assert_eq!(Probe::Echoed.into_text(), None);
        assert_eq!(Probe::Absent.into_text(), None);
    }
}
