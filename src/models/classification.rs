// file: src/models/classification.rs
// description: search classification label produced by the query router
// reference: Serialized as the lowercase labels the search api expects

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchClassification {
    /// Structured street address lookup
    #[serde(rename = "address")]
    Address,

    /// Free-text intent query
    #[serde(rename = "natural")]
    NaturalLanguage,
}

impl SearchClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchClassification::Address => "address",
            SearchClassification::NaturalLanguage => "natural",
        }
    }

    pub fn is_address(&self) -> bool {
        matches!(self, SearchClassification::Address)
    }
}

impl fmt::Display for SearchClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(SearchClassification::Address.to_string(), "address");
        assert_eq!(SearchClassification::NaturalLanguage.to_string(), "natural");
        assert!(SearchClassification::Address.is_address());
        assert!(!SearchClassification::NaturalLanguage.is_address());
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&SearchClassification::NaturalLanguage).unwrap();
        assert_eq!(json, "\"natural\"");

        let parsed: SearchClassification = serde_json::from_str("\"address\"").unwrap();
        assert_eq!(parsed, SearchClassification::Address);
    }
}
