//! Presentation rules for resolved post sections.
//!
//! Sections are colored by their position in the emitted sequence, so a
//! skipped section shifts the colors of everything after it.

use crate::i18n::Catalog;

/// Accent color of a section, used as a `theme-{name}` CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTheme {
    Blue,
    Purple,
    Orange,
    Teal,
    Red,
    Green,
    Indigo,
}

pub const PALETTE: [SectionTheme; 7] = [
    SectionTheme::Blue,
    SectionTheme::Purple,
    SectionTheme::Orange,
    SectionTheme::Teal,
    SectionTheme::Red,
    SectionTheme::Green,
    SectionTheme::Indigo,
];

impl SectionTheme {
    pub const fn for_index(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Teal => "teal",
            Self::Red => "red",
            Self::Green => "green",
            Self::Indigo => "indigo",
        }
    }

    pub fn class(self) -> String {
        format!("theme-{}", self.name())
    }
}

/// Which post image belongs under the section at `index`.
///
/// Slots: 0 → first, 2 → second, 3 → third. The conclusion never gets one,
/// and an empty image path means no image.
pub fn image_slot<'a>(index: usize, conclusion: bool, images: [&'a str; 3]) -> Option<&'a str> {
    if conclusion {
        return None;
    }
    let image = match index {
        0 => images[0],
        2 => images[1],
        3 => images[2],
        _ => return None,
    };
    (!image.is_empty()).then_some(image)
}

pub const DEFAULT_ICON: &str = "📄";

/// Badge icon for a subsection key.
pub fn subsection_icon(key: &str) -> &'static str {
    match key {
        "example" => "✓",
        "memoryExample" => "💾",
        "unicodeDetails" => "🔤",
        "imageProcessing" => "🖼️",
        "realWorldUse" | "realWorldApplications" => "🌍",
        "code" => "💻",
        "note" => "📝",
        "tip" => "💡",
        "warning" => "⚠️",
        "info" => "ℹ️",
        _ => DEFAULT_ICON,
    }
}

/// Catalog key under `Blog` holding a subsection's label.
fn label_key(key: &str) -> &str {
    match key {
        "realWorldUse" => "realWorldApplications",
        other => other,
    }
}

/// Localized subsection label, or the humanized key when untranslated.
pub fn subsection_label(catalog: &Catalog, key: &str) -> String {
    catalog
        .namespace("Blog")
        .get(label_key(key))
        .filter(|label| !label.is_empty())
        .map_or_else(|| humanize(key), str::to_string)
}

/// `"memoryExample"` → `"Memory Example"`.
pub fn humanize(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else {
            if c.is_uppercase() {
                out.push(' ');
            }
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(SectionTheme::for_index(0), SectionTheme::Blue);
        assert_eq!(SectionTheme::for_index(6), SectionTheme::Indigo);
        assert_eq!(SectionTheme::for_index(7), SectionTheme::Blue);
        assert_eq!(SectionTheme::for_index(9).class(), "theme-orange");
    }

    #[test]
    fn test_image_slots() {
        let images = ["/a.png", "/b.png", ""];
        assert_eq!(image_slot(0, false, images), Some("/a.png"));
        assert_eq!(image_slot(1, false, images), None);
        assert_eq!(image_slot(2, false, images), Some("/b.png"));
        assert_eq!(image_slot(3, false, images), None);
        assert_eq!(image_slot(0, true, images), None);
    }

    #[test]
    fn test_icons() {
        assert_eq!(subsection_icon("memoryExample"), "💾");
        assert_eq!(subsection_icon("realWorldUse"), "🌍");
        assert_eq!(subsection_icon("somethingElse"), DEFAULT_ICON);
    }

    #[test]
    fn test_labels() {
        let catalog = Catalog::from_value(
            "en",
            json!({ "Blog": { "realWorldApplications": "Real-World Applications", "example": "" } }),
        )
        .unwrap();
        assert_eq!(
            subsection_label(&catalog, "realWorldUse"),
            "Real-World Applications"
        );
        assert_eq!(subsection_label(&catalog, "memoryExample"), "Memory Example");
        assert_eq!(subsection_label(&catalog, "example"), "Example");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("unicodeDetails"), "Unicode Details");
        assert_eq!(humanize("tip"), "Tip");
        assert_eq!(humanize(""), "");
    }
}
