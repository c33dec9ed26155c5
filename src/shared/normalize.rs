//! Case folding applied to every lookup key.
//!
//! Codes fold to upper case, names and search queries to lower case. Codes
//! and exact-match names are trimmed first; an input that is empty after
//! trimming yields `None`, which callers turn into their not-found sentinel.
//! Search queries are never trimmed: whitespace is part of the substring.

/// Normalize a state code for `stateByCode` / `lgasByStateCode` lookups.
pub fn normalize_code(code: &str) -> Option<String> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    Some(code.to_uppercase())
}

/// Normalize a state or LGA name for exact-key lookups.
pub fn normalize_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_lowercase())
}

/// Normalize a partial-text search query. Only a truly empty query yields
/// `None`; surrounding whitespace is kept.
pub fn normalize_query(query: &str) -> Option<String> {
    if query.is_empty() {
        return None;
    }
    Some(query.to_lowercase())
}

/// Case-insensitive substring test. `needle` must already be normalized.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("la").as_deref(), Some("LA"));
        assert_eq!(normalize_code("  Kn ").as_deref(), Some("KN"));
        assert_eq!(normalize_code(""), None);
        assert_eq!(normalize_code("   "), None);
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Lagos").as_deref(), Some("lagos"));
        assert_eq!(normalize_name(" Akwa Ibom ").as_deref(), Some("akwa ibom"));
        assert_eq!(normalize_name("\t"), None);
    }

    #[test]
    fn test_normalize_query_keeps_whitespace() {
        assert_eq!(normalize_query("Ondo").as_deref(), Some("ondo"));
        assert_eq!(normalize_query(" ").as_deref(), Some(" "));
        assert_eq!(normalize_query("Ibadan North ").as_deref(), Some("ibadan north "));
        assert_eq!(normalize_query(""), None);
    }

    #[test]
    fn test_contains_folded() {
        assert!(contains_folded("Ondo", "ond"));
        assert!(contains_folded("Ibadan North-East", "north-east"));
        assert!(!contains_folded("Lagos", "kano"));
    }
}
