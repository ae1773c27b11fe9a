// file: src/router/classifier.rs
// description: address vs natural-language classification of search input
// reference: keyword-first routing with a structural address fallback

use crate::models::SearchClassification;
use crate::router::patterns::{find_keyword, looks_like_street_address};
use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_CLASSIFIER: QueryClassifier = QueryClassifier::default();
}

/// Classifies `query` with the built-in vocabulary.
pub fn classify(query: &str) -> SearchClassification {
    DEFAULT_CLASSIFIER.classify(query)
}

/// Which rule decided a classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReason {
    Keyword(String),
    AddressPattern,
    Default,
}

#[derive(Debug, Clone, Default)]
pub struct QueryClassifier {
    extra_keywords: Vec<String>,
}

impl QueryClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds signal words on top of the built-in vocabulary.
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra_keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Self { extra_keywords }
    }

    pub fn classify(&self, query: &str) -> SearchClassification {
        self.explain(query).0
    }

    /// Classification plus the rule that produced it.
    ///
    /// Keywords are checked before the address pattern, so
    /// "123 Main St with a pool" is natural language.
    pub fn explain(&self, query: &str) -> (SearchClassification, MatchReason) {
        let lowered = query.to_lowercase();

        if let Some(keyword) = self.find_keyword(&lowered) {
            return (
                SearchClassification::NaturalLanguage,
                MatchReason::Keyword(keyword),
            );
        }

        if looks_like_street_address(&lowered) {
            return (SearchClassification::Address, MatchReason::AddressPattern);
        }

        (SearchClassification::NaturalLanguage, MatchReason::Default)
    }

    fn find_keyword(&self, lowered: &str) -> Option<String> {
        if let Some(keyword) = find_keyword(lowered) {
            return Some(keyword.to_string());
        }

        self.extra_keywords
            .iter()
            .find(|k| lowered.contains(k.as_str()))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_structural_address() {
        assert_eq!(classify("1180 Main St"), SearchClassification::Address);
        assert_eq!(classify("77 Ocean Blvd, Miami FL"), SearchClassification::Address);
        assert_eq!(classify("5 Elm Ct"), SearchClassification::Address);
    }

    #[test]
    fn test_keyword_beats_address_pattern() {
        assert_eq!(
            classify("123 Main Street with a pool"),
            SearchClassification::NaturalLanguage
        );
        assert_eq!(
            classify("123 Main St with a pool"),
            SearchClassification::NaturalLanguage
        );
        assert_eq!(
            classify("homes near 400 Pine Ave"),
            SearchClassification::NaturalLanguage
        );
    }

    #[test]
    fn test_missing_word_boundary_falls_through() {
        assert_eq!(classify("1180 Mainstreet"), SearchClassification::NaturalLanguage);
        let (_, reason) = QueryClassifier::new().explain("1180 Mainstreet");
        assert_eq!(reason, MatchReason::Default);
    }

    #[test]
    fn test_ambiguous_defaults_to_natural() {
        assert_eq!(classify("hello world"), SearchClassification::NaturalLanguage);
        let (_, reason) = QueryClassifier::new().explain("hello world");
        assert_eq!(reason, MatchReason::Default);
    }

    #[test]
    fn test_total_over_odd_input() {
        for input in ["", "   ", "\n\t", "東京都港区六本木6-10-1", "Ünïcödé 12 Straße", "🏠🏊", "0"] {
            let label = classify(input);
            assert!(matches!(
                label,
                SearchClassification::Address | SearchClassification::NaturalLanguage
            ));
        }
        assert_eq!(classify(""), SearchClassification::NaturalLanguage);
    }

    #[test]
    fn test_street_names_resembling_signal_words() {
        assert_eq!(classify("9 Westview Dr"), SearchClassification::Address);
        assert_eq!(classify("18 Lighthouse Ln"), SearchClassification::Address);
        assert_eq!(classify("300 Homestead Rd"), SearchClassification::Address);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("1180 MAIN ST"), SearchClassification::Address);
        assert_eq!(classify("FIND 1180 MAIN ST"), SearchClassification::NaturalLanguage);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let classifier = QueryClassifier::new();
        let first = classifier.classify("1180 Main St");
        classifier.classify("3 bedroom condo downtown");
        assert_eq!(classifier.classify("1180 Main St"), first);
    }

    #[test]
    fn test_explain_reports_keyword() {
        let (label, reason) = QueryClassifier::new().explain("Show me lofts");
        assert_eq!(label, SearchClassification::NaturalLanguage);
        assert_eq!(reason, MatchReason::Keyword("show".to_string()));

        let (label, reason) = QueryClassifier::new().explain("1180 Main St");
        assert_eq!(label, SearchClassification::Address);
        assert_eq!(reason, MatchReason::AddressPattern);
    }

    #[test]
    fn test_extra_keywords() {
        let classifier = QueryClassifier::with_keywords(["Waterfront", "  ", ""]);
        assert_eq!(
            classifier.classify("12 Harbor Way waterfront"),
            SearchClassification::NaturalLanguage
        );
        assert_eq!(classifier.classify("12 Harbor Way"), SearchClassification::Address);
        assert_eq!(classify("12 Harbor Way waterfront"), SearchClassification::Address);
    }
}
