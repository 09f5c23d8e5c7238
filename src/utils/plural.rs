//! Pluralization for log lines and English fallback labels.

/// `""` for exactly one, `"s"` otherwise.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `plural_count(3, "page")` → `"3 pages"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "article"), "0 articles");
        assert_eq!(plural_count(1, "article"), "1 article");
        assert_eq!(plural_count(12, "page"), "12 pages");
    }
}
