//! URL slugs for tag and technology filter pages.

use deunicode::deunicode;

/// Turn a display label into a lowercase ASCII slug.
///
/// Non-alphanumeric runs collapse into a single `-`:
/// `"Node.js"` → `"node-js"`, `"Computer Science"` → `"computer-science"`.
/// Labels with no transliterable characters fall back to `"item"`.
pub fn slugify(label: &str) -> String {
    let ascii = deunicode(label);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        slug.push_str("item");
    }
    slug
}
