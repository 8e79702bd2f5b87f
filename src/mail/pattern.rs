//! Wildcard address patterns
//!
//! `*` matches exactly one path segment. There is no multi-segment or
//! partial-segment wildcarding: `gastown/*` matches `gastown/witness` but not
//! `gastown/crew/max`, and `gas*/witness` matches nothing but itself.

/// Check whether `address` matches `pattern`
pub fn match_pattern(pattern: &str, address: &str) -> bool {
    let mut pattern_parts = pattern.split('/');
    let mut address_parts = address.split('/');

    loop {
        match (pattern_parts.next(), address_parts.next()) {
            (None, None) => return true,
            (Some(p), Some(a)) => {
                if p != "*" && p != a {
                    return false;
                }
            }
            // Segment counts differ
            _ => return false,
        }
    }
}

/// Whether an address contains a wildcard
pub fn is_pattern(address: &str) -> bool {
    address.contains('*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_pattern() {
        let cases = vec![
            // Exact matches
            ("gastown/witness", "gastown/witness", true),
            ("mayor/", "mayor/", true),
            // Wildcard matches
            ("*/witness", "gastown/witness", true),
            ("*/witness", "beads/witness", true),
            ("gastown/*", "gastown/witness", true),
            ("gastown/*", "gastown/refinery", true),
            ("gastown/crew/*", "gastown/crew/max", true),
            ("*/*", "gastown/Toast", true),
            // Non-matches
            ("*/witness", "gastown/refinery", false),
            ("gastown/*", "beads/witness", false),
            ("gastown/crew/*", "beads/crew/max", false),
            // Different segment counts
            ("gastown/*", "gastown/crew/max", false),
            ("gastown/crew/*", "gastown/witness", false),
            ("rig/*", "rig/crew/x", false),
            ("*", "gastown/witness", false),
        ];

        for (pattern, address, want) in cases {
            assert_eq!(
                match_pattern(pattern, address),
                want,
                "match_pattern({:?}, {:?})",
                pattern,
                address
            );
        }
    }

    #[test]
    fn test_no_partial_segment_wildcards() {
        assert!(!match_pattern("gas*/witness", "gastown/witness"));
        assert!(match_pattern("gas*/witness", "gas*/witness"));
    }

    #[test]
    fn test_trailing_slash_is_a_segment() {
        assert!(match_pattern("*/", "mayor/"));
        assert!(!match_pattern("*", "mayor/"));
    }

    #[test]
    fn test_is_pattern() {
        assert!(is_pattern("*/witness"));
        assert!(!is_pattern("gastown/witness"));
    }
}
