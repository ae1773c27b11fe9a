// file: src/utils/validation.rs
// description: input validation for origins, request paths, headers and queries
// reference: input validation patterns

use crate::error::{GatewayError, Result};
use reqwest::header::{HeaderName, HeaderValue};

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(GatewayError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }

        let host = url.split("://").nth(1).unwrap_or("");
        if host.is_empty() || host.starts_with('/') {
            return Err(GatewayError::Validation(format!(
                "URL has no host: {}",
                url
            )));
        }

        Ok(())
    }

    pub fn validate_request_path(path: &str) -> Result<()> {
        if !path.starts_with('/') {
            return Err(GatewayError::Validation(format!(
                "Request path must start with '/': {}",
                path
            )));
        }
        Ok(())
    }

    pub fn validate_query_not_empty(query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Err(GatewayError::Validation("Search query is empty".to_string()));
        }
        Ok(())
    }

    /// Parses a `Name: value` header line as typed on the command line.
    pub fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue)> {
        let (name, value) = raw.split_once(':').ok_or_else(|| {
            GatewayError::Validation(format!("Header must look like 'Name: value': {}", raw))
        })?;

        let name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|e| GatewayError::Validation(format!("Invalid header name in '{}': {}", raw, e)))?;
        let value = HeaderValue::from_str(value.trim())
            .map_err(|e| GatewayError::Validation(format!("Invalid header value in '{}': {}", raw, e)))?;

        Ok((name, value))
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let head: String = text.chars().take(max_chars).collect();
            format!("{}...", head)
        }
    }
}
