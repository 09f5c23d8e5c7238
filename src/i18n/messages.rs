//! All catalogs of a site, keyed by locale.
//!
//! Catalogs live in `<messages dir>/<locale>.json`. The default locale's
//! catalog must load. Any other locale whose file is missing or malformed is
//! served with the default messages instead, and the failure is logged.

use super::{Catalog, LocaleRouting};
use crate::log;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// Loaded catalogs of every supported locale.
#[derive(Debug, Clone)]
pub struct Messages {
    catalogs: FxHashMap<String, Catalog>,
    default: String,
}

impl Messages {
    /// Path of a locale's catalog file.
    pub fn catalog_path(dir: &Path, locale: &str) -> PathBuf {
        dir.join(format!("{locale}.json"))
    }

    /// Load every locale of `routing` from `dir`.
    pub fn load(dir: &Path, routing: &LocaleRouting) -> Result<Self> {
        let default = routing.default_locale();
        let default_catalog = Catalog::load(default, &Self::catalog_path(dir, default))
            .with_context(|| format!("Failed to load messages for default locale `{default}`"))?;

        let mut catalogs = Vec::with_capacity(routing.locales().len());
        for locale in routing.locales().iter().filter(|l| *l != default) {
            let catalog = match Catalog::load(locale.as_str(), &Self::catalog_path(dir, locale)) {
                Ok(catalog) => catalog,
                Err(e) => {
                    log!("i18n"; "{e}; serving `{locale}` with `{default}` messages");
                    default_catalog.clone().with_locale(locale.as_str())
                }
            };
            catalogs.push(catalog);
        }
        catalogs.push(default_catalog);

        Self::from_catalogs(catalogs, default)
            .with_context(|| format!("No catalog for default locale `{default}`"))
    }

    /// Build from catalogs already in memory. The default must be among them.
    pub fn from_catalogs(catalogs: Vec<Catalog>, default: &str) -> Option<Self> {
        let catalogs: FxHashMap<_, _> = catalogs
            .into_iter()
            .map(|c| (c.locale().to_string(), c))
            .collect();
        catalogs.contains_key(default).then(|| Self {
            catalogs,
            default: default.to_string(),
        })
    }

    /// Catalog of `locale`, or the default catalog for unknown locales.
    pub fn get(&self, locale: &str) -> &Catalog {
        self.catalogs
            .get(locale)
            .or_else(|| self.catalogs.get(&self.default))
            .expect("default catalog is always present")
    }
}
