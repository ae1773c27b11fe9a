// file: src/router/patterns.rs
// description: compiled street-address pattern and natural-language signal vocabulary
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

/// Signal words matched as lower-case substrings. Any hit makes a query natural language.
pub const NATURAL_LANGUAGE_KEYWORDS: &[&str] = &[
    // intent
    "find",
    "show",
    "want",
    "looking",
    "search",
    "need",
    // comparators
    "under",
    "over",
    "near",
    "below",
    "above",
    "between",
    "less than",
    "more than",
    "cheap",
    "affordable",
    "with",
    // property features
    "bedroom",
    "bathroom",
    "pool",
    "downtown",
    "garage",
    "backyard",
    "condo",
    "apartment",
    "rental",
    "luxury",
];

lazy_static! {
    // number, at least one street-name word, then a suffix on a word boundary
    pub static ref STREET_ADDRESS: Regex = Regex::new(
        r"(?i)^\s*\d+[a-z]?\s+(?:\S+\s+)+?(?:st|street|ave|avenue|rd|road|blvd|boulevard|dr|drive|ct|court|ln|lane|way|pl|place|pkwy|parkway)\b\.?"
    ).expect("STREET_ADDRESS regex is valid");
}

pub fn looks_like_street_address(text: &str) -> bool {
    STREET_ADDRESS.is_match(text)
}

/// First built-in signal word found in already lower-cased text.
pub fn find_keyword(lowered: &str) -> Option<&'static str> {
    NATURAL_LANGUAGE_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_address_pattern() {
        assert!(STREET_ADDRESS.is_match("1180 Main St"));
        assert!(STREET_ADDRESS.is_match("1180 main st."));
        assert!(STREET_ADDRESS.is_match("42 Old Mill Rd, Springfield IL"));
        assert!(STREET_ADDRESS.is_match("  7 Sunset BLVD"));
        assert!(STREET_ADDRESS.is_match("12B Harbor Pkwy"));
        assert!(STREET_ADDRESS.is_match("900 Elm Street"));
    }

    #[test]
    fn test_suffix_requires_word_boundary() {
        assert!(!STREET_ADDRESS.is_match("1180 Mainstreet"));
        assert!(!STREET_ADDRESS.is_match("55 Stanford"));
        assert!(!STREET_ADDRESS.is_match("10 Broadwayside"));
    }

    #[test]
    fn test_street_address_requires_number_and_name() {
        assert!(!STREET_ADDRESS.is_match("Main St"));
        assert!(!STREET_ADDRESS.is_match("123 St"));
        assert!(!STREET_ADDRESS.is_match(""));
    }

    #[test]
    fn test_common_street_names_carry_no_signal() {
        assert_eq!(find_keyword("9 westview dr"), None);
        assert_eq!(find_keyword("18 lighthouse ln"), None);
        assert_eq!(find_keyword("300 homestead rd"), None);
        assert_eq!(find_keyword("7 kingslist ct"), None);
    }

    #[test]
    fn test_find_keyword() {
        assert_eq!(find_keyword("3 bedroom condo"), Some("bedroom"));
        assert_eq!(find_keyword("123 main street with a pool"), Some("with"));
        assert_eq!(find_keyword("1180 main st"), None);
        assert_eq!(find_keyword("hello world"), None);
    }
}
