//! Translation catalog for a single locale.
//!
//! A catalog is the parsed `messages/<locale>.json` file: a nested JSON
//! object addressed by dotted paths (`"Blog.readTime"`,
//! `"BlogPosts.binaryDecimalConversion.content.intro"`).
//!
//! [`Catalog::lookup`] reports presence explicitly through [`Lookup`].
//! [`Translator`] is the namespaced view used by page renderers; its `t()`
//! keeps the next-intl convention of echoing `"Namespace.key"` when a message
//! is missing, so untranslated UI strings stay visible instead of vanishing.

use serde_json::{Map, Value};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid JSON in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("`{0}` must contain a JSON object at the top level")]
    NotObject(PathBuf),
}

/// Result of resolving a dotted path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// The path resolves to a string.
    Found(&'a str),
    /// The path exists but holds an object, array, number, bool or null.
    NotText(&'a Value),
    /// Some segment of the path does not exist.
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn text(self) -> Option<&'a str> {
        match self {
            Self::Found(text) => Some(text),
            _ => None,
        }
    }
}

/// Messages of one locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: String,
    root: Map<String, Value>,
}

impl Catalog {
    /// Build a catalog from an already parsed JSON value.
    pub fn from_value(locale: impl Into<String>, value: Value) -> Option<Self> {
        match value {
            Value::Object(root) => Some(Self {
                locale: locale.into(),
                root,
            }),
            _ => None,
        }
    }

    /// Parse a catalog from JSON text. `origin` is only used in errors.
    pub fn from_json(
        locale: impl Into<String>,
        json: &str,
        origin: &Path,
    ) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| CatalogError::Json(origin.to_path_buf(), e))?;
        Self::from_value(locale, value).ok_or_else(|| CatalogError::NotObject(origin.to_path_buf()))
    }

    /// Load `path` as the catalog for `locale`.
    pub fn load(locale: impl Into<String>, path: &Path) -> Result<Self, CatalogError> {
        let json =
            fs::read_to_string(path).map_err(|e| CatalogError::Io(path.to_path_buf(), e))?;
        Self::from_json(locale, &json, path)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Same messages served under another locale (used for load fallbacks).
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Resolve a dotted path to its raw JSON value.
    pub fn raw(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Resolve a dotted path, reporting whether it holds text.
    pub fn lookup(&self, path: &str) -> Lookup<'_> {
        match self.raw(path) {
            Some(Value::String(text)) => Lookup::Found(text),
            Some(other) => Lookup::NotText(other),
            None => Lookup::NotFound,
        }
    }

    /// View of the catalog rooted at a top-level namespace such as `"Blog"`.
    pub fn namespace<'a>(&'a self, namespace: &'a str) -> Translator<'a> {
        Translator {
            catalog: self,
            namespace,
        }
    }
}

/// Namespaced catalog view, mirroring `useTranslations("Namespace")`.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    namespace: &'a str,
}

impl<'a> Translator<'a> {
    pub const fn namespace(&self) -> &'a str {
        self.namespace
    }

    /// Absolute dotted path of a namespaced key.
    pub fn full_key(&self, key: &str) -> String {
        if self.namespace.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.namespace, key)
        }
    }

    pub fn lookup(&self, key: &str) -> Lookup<'a> {
        self.catalog.lookup(&self.full_key(key))
    }

    /// Text of `key`, or `None` when it is missing or not a string.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.lookup(key).text()
    }

    /// Text of `key`, echoing the full key when it is missing.
    pub fn t(&self, key: &str) -> String {
        match self.get(key) {
            Some(text) => text.to_string(),
            None => self.full_key(key),
        }
    }

    /// Text of `key` with `{name}` placeholders substituted from `args`.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), args)
    }

    /// Text of `key`, or `fallback` when it is missing.
    pub fn t_or(&self, key: &str, fallback: &str) -> String {
        self.get(key).unwrap_or(fallback).to_string()
    }
}

/// Replace `{name}` placeholders. Unknown placeholders are left untouched.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    if args.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = after[..close].trim();
                match args.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[open..open + close + 2]),
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
