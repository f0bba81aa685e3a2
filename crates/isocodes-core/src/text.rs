// crates/isocodes-core/src/text.rs

/// Convert a string into a folded key suitable for loose comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use isocodes_core::text::fold_key;
///
/// assert_eq!(fold_key("Türkiye"), "turkiye");
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Case-insensitive substring test. Accents are significant.
#[inline]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ignores_case_only() {
        assert!(contains_ignore_case("United Kingdom", "kingdom"));
        assert!(contains_ignore_case("Åland Islands", "åland"));
        assert!(!contains_ignore_case("Åland Islands", "aland"));
    }

    #[test]
    fn fold_strips_accents() {
        assert_eq!(fold_key("Åland Islands"), "aland islands");
    }
}
