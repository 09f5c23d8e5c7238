//! Shared helpers: HTML escaping, dates, slugs, paths, MIME types.

pub mod date;
pub mod html;
pub mod mime;
pub mod path;
pub mod plural;
pub mod slug;

pub use plural::plural_count;
