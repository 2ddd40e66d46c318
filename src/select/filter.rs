/// Case-insensitive substring match of `query` against `name`.
/// An empty query matches everything.
pub fn matches_query(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_all() {
        assert!(matches_query("Anna", ""));
        assert!(matches_query("", ""));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(matches_query("Anna", "an"));
        assert!(matches_query("Anna", "AN"));
        assert!(matches_query("anna", "Ann"));
    }

    #[test]
    fn test_substring_anywhere() {
        // "an" is a substring of both "Anna" and "Hannah"
        assert!(matches_query("Anna", "an"));
        assert!(matches_query("Hannah", "an"));
        assert!(!matches_query("Bob", "an"));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches_query("Anna", "annab"));
        assert!(!matches_query("", "a"));
    }
}
