// file: src/models/request.rs
// description: caller-facing request options for the api access layer
// reference: https://docs.rs/reqwest/latest/reqwest/struct.RequestBuilder.html

use crate::error::Result;
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether cookies travel with the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Credentials {
    #[default]
    Include,
    Omit,
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Include => f.write_str("include"),
            Credentials::Omit => f.write_str("omit"),
        }
    }
}

/// Method, headers, body and credential policy for a single call.
///
/// Headers set here override the JSON defaults applied by
/// [`SmartFetch`](crate::network::SmartFetch). Leaving `credentials` unset
/// means the fetcher's configured policy applies.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<String>,
    pub credentials: Option<Credentials>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get() -> Self {
        Self::new().method(Method::GET)
    }

    pub fn post() -> Self {
        Self::new().method(Method::POST)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn json<T: Serialize + ?Sized>(self, body: &T) -> Result<Self> {
        let encoded = serde_json::to_string(body)?;
        Ok(self.body(encoded))
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = RequestOptions::new();
        assert_eq!(options.method, Method::GET);
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
        assert!(options.credentials.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let options = RequestOptions::post()
            .header(AUTHORIZATION, HeaderValue::from_static("Bearer t"))
            .json(&json!({"query": "condo near the beach"}))
            .unwrap()
            .credentials(Credentials::Omit);

        assert_eq!(options.method, Method::POST);
        assert_eq!(options.headers[AUTHORIZATION], "Bearer t");
        assert_eq!(options.body.as_deref(), Some(r#"{"query":"condo near the beach"}"#));
        assert_eq!(options.credentials, Some(Credentials::Omit));
    }

    #[test]
    fn test_credentials_serde() {
        let parsed: Credentials = serde_json::from_str("\"omit\"").unwrap();
        assert_eq!(parsed, Credentials::Omit);
        assert_eq!(Credentials::default(), Credentials::Include);
        assert_eq!(Credentials::Include.to_string(), "include");
    }
}
