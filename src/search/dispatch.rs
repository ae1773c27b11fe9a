// file: src/search/dispatch.rs
// description: turns a search box entry into the matching api call
// reference: classification-driven payload selection over SmartFetch

use crate::config::SearchConfig;
use crate::error::Result;
use crate::models::{RequestOptions, SearchClassification};
use crate::network::{SmartFetch, Transport};
use crate::router::QueryClassifier;
use crate::utils::Validator;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Request body for the search api, shaped by the classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchPayload {
    /// Address lookups go out as a sentence wrapping the address.
    Address { message: String },
    Natural { query: String },
}

impl SearchPayload {
    pub fn for_address(address: &str) -> Self {
        SearchPayload::Address {
            message: format!("Tell me about the property at {}", address),
        }
    }

    pub fn for_natural(query: &str) -> Self {
        SearchPayload::Natural {
            query: query.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub classification: SearchClassification,
    pub path: String,
    pub payload: SearchPayload,
}

pub struct SearchDispatcher<'a, T: Transport> {
    fetch: &'a SmartFetch<T>,
    classifier: QueryClassifier,
    config: SearchConfig,
}

impl<'a, T: Transport> SearchDispatcher<'a, T> {
    pub fn new(fetch: &'a SmartFetch<T>, config: SearchConfig) -> Self {
        let classifier = QueryClassifier::with_keywords(&config.extra_keywords);
        Self {
            fetch,
            classifier,
            config,
        }
    }

    pub fn prepare(&self, query: &str) -> Result<SearchRequest> {
        Validator::validate_query_not_empty(query)?;
        let query = query.trim();

        let classification = self.classifier.classify(query);
        let (path, payload) = match classification {
            SearchClassification::Address => (
                self.config.address_path.clone(),
                SearchPayload::for_address(query),
            ),
            SearchClassification::NaturalLanguage => (
                self.config.natural_path.clone(),
                SearchPayload::for_natural(query),
            ),
        };

        debug!(
            "Routing search '{}' as {} to {}",
            Validator::truncate_text(query, 60),
            classification,
            path
        );

        Ok(SearchRequest {
            classification,
            path,
            payload,
        })
    }

    /// POSTs the prepared request and returns the response as received.
    pub async fn search(&self, query: &str) -> Result<T::Response> {
        let request = self.prepare(query)?;
        let options = RequestOptions::post().json(&request.payload)?;
        self.fetch.fetch(&request.path, options).await
    }
}
