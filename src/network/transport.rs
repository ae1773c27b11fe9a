// file: src/network/transport.rs
// description: transport seam between the fallback logic and the http client
// reference: https://docs.rs/reqwest

use crate::error::{GatewayError, Result};
use crate::models::Credentials;
use reqwest::header::HeaderMap;
use reqwest::{Client, ClientBuilder, Method};
use std::fmt;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connection refused, reset, or host lookup failed
    Connect,
    Timeout,
    /// Anything else that kept a response from arriving
    Request,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportErrorKind::Connect => f.write_str("connect"),
            TransportErrorKind::Timeout => f.write_str("timeout"),
            TransportErrorKind::Request => f.write_str("request"),
        }
    }
}

/// No response was obtained. HTTP error statuses are never reported this way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind} failure for {url}: {message}")]
pub struct TransportError {
    pub url: String,
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(url: &str, kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            kind,
            message: message.into(),
        }
    }

    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else {
            TransportErrorKind::Request
        };
        Self::new(url, kind, err.to_string())
    }
}

/// A request fully resolved against one origin.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
    pub credentials: Credentials,
}

impl HttpRequest {
    /// Same method, headers, body and credentials sent somewhere else.
    pub fn retarget(&self, url: String) -> Self {
        Self {
            url,
            ..self.clone()
        }
    }
}

pub trait Transport: Send + Sync {
    type Response: Send;

    fn send(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = std::result::Result<Self::Response, TransportError>> + Send;
}

/// reqwest-backed transport. Responses are handed back untouched,
/// whatever their status.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    with_cookies: Client,
    without_cookies: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let with_cookies = Self::builder(timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| GatewayError::Client(format!("Failed to build HTTP client: {}", e)))?;

        let without_cookies = Self::builder(timeout)
            .build()
            .map_err(|e| GatewayError::Client(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            with_cookies,
            without_cookies,
        })
    }

    fn builder(timeout: Option<Duration>) -> ClientBuilder {
        let builder = Client::builder();
        match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    fn client_for(&self, credentials: Credentials) -> &Client {
        match credentials {
            Credentials::Include => &self.with_cookies,
            Credentials::Omit => &self.without_cookies,
        }
    }
}

impl Transport for ReqwestTransport {
    type Response = reqwest::Response;

    async fn send(
        &self,
        request: &HttpRequest,
    ) -> std::result::Result<reqwest::Response, TransportError> {
        let mut builder = self
            .client_for(request.credentials)
            .request(request.method.clone(), request.url.as_str())
            .headers(request.headers.clone());

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        builder
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(&request.url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{ACCEPT, HeaderValue};

    #[test]
    fn test_retarget_keeps_everything_but_url() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let local = HttpRequest {
            method: Method::POST,
            url: "http://localhost:5000/api/search".to_string(),
            headers,
            body: Some("{}".to_string()),
            credentials: Credentials::Include,
        };

        let production = local.retarget("https://api.example.com/api/search".to_string());
        assert_eq!(production.url, "https://api.example.com/api/search");
        assert_eq!(production.method, local.method);
        assert_eq!(production.headers, local.headers);
        assert_eq!(production.body, local.body);
        assert_eq!(production.credentials, local.credentials);
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::new(
            "http://localhost:5000/x",
            TransportErrorKind::Connect,
            "connection refused",
        );
        assert_eq!(
            err.to_string(),
            "connect failure for http://localhost:5000/x: connection refused"
        );
    }

    #[test]
    fn test_client_builds_with_and_without_timeout() {
        assert!(ReqwestTransport::new(None).is_ok());
        assert!(ReqwestTransport::new(Some(Duration::from_secs(5))).is_ok());
    }
}
