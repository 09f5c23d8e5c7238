//! Localization: catalogs, locale routing and presence probes.
//!
//! ```text
//! i18n/
//! ├── catalog.rs    # Catalog (one locale's messages), Lookup, Translator
//! ├── locale.rs     # LocaleRouting (supported locales, URLs, direction)
//! ├── messages.rs   # Messages (all catalogs, default-locale fallback)
//! └── probe.rs      # Probe (Present / Absent / Echoed) and the echo guard
//! ```

pub mod catalog;
pub mod locale;
pub mod messages;
pub mod probe;

pub use catalog::{Catalog, Lookup, Translator};
pub use locale::LocaleRouting;
pub use messages::Messages;
pub use probe::{Probe, Prober};
