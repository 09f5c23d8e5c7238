//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module    | TOML Section  | Purpose                                |
//! |-----------|---------------|----------------------------------------|
//! | `build`   | `[build]`     | Output directory, minify, feed, sitemap |
//! | `content` | `[content]`   | Content registry and static files      |
//! | `i18n`    | `[i18n]`      | Locales and translation catalogs       |
//! | `serve`   | `[serve]`     | Development server                     |
//! | `site`    | `[site]`      | Site metadata                          |
//! | `theme`   | `[theme]`     | Initial color mode                     |

pub mod build;
mod content;
mod i18n;
mod serve;
mod site;
mod theme;

pub use build::{BuildSectionConfig, FeedConfig, FeedFormat};
pub use content::ContentConfig;
pub use i18n::I18nConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
pub use theme::ThemeSectionConfig;
