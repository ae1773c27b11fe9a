// file: src/network/smart_fetch.rs
// description: local-first api access with a single production fallback
// reference: https://docs.rs/reqwest

use crate::config::NetworkConfig;
use crate::error::{GatewayError, Result};
use crate::models::{Credentials, RequestOptions};
use crate::network::observer::{FetchObserver, OriginKind, TracingObserver};
use crate::network::transport::{HttpRequest, ReqwestTransport, Transport};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{Instrument, info_span};
use uuid::Uuid;

/// Base URLs of the two backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origins {
    pub local: String,
    pub production: String,
}

impl Origins {
    pub fn new(local: impl Into<String>, production: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            production: production.into(),
        }
    }

    pub fn from_config(config: &NetworkConfig) -> Self {
        Self::new(&config.local_origin, &config.production_origin)
    }

    pub fn base(&self, origin: OriginKind) -> &str {
        match origin {
            OriginKind::Local => &self.local,
            OriginKind::Production => &self.production,
        }
    }

    pub fn url_for(&self, origin: OriginKind, path: &str) -> String {
        join_url(self.base(origin), path)
    }
}

/// Plain concatenation, except a doubled slash at the seam is collapsed.
fn join_url(base: &str, path: &str) -> String {
    match (base.strip_suffix('/'), path.starts_with('/')) {
        (Some(trimmed), true) => format!("{}{}", trimmed, path),
        _ => format!("{}{}", base, path),
    }
}

pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Sends each request to the local origin first and, only when that attempt
/// fails at the transport level, once more to the production origin.
///
/// Any HTTP response from the local origin is final, including 4xx and 5xx.
/// At most two attempts are made per call and they never overlap.
pub struct SmartFetch<T: Transport = ReqwestTransport> {
    transport: T,
    origins: Origins,
    credentials: Credentials,
    observer: Arc<dyn FetchObserver>,
}

impl SmartFetch<ReqwestTransport> {
    pub fn from_config(config: &NetworkConfig) -> Result<Self> {
        let timeout = config.request_timeout_secs.map(Duration::from_secs);
        let transport = ReqwestTransport::new(timeout)?;

        Ok(Self::with_transport(transport, Origins::from_config(config))
            .with_credentials(config.credentials))
    }
}

impl<T: Transport> SmartFetch<T> {
    pub fn with_transport(transport: T, origins: Origins) -> Self {
        Self {
            transport,
            origins,
            credentials: Credentials::default(),
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Policy used when a call does not set its own.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn origins(&self) -> &Origins {
        &self.origins
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves `options` against the local origin. Caller headers replace
    /// the JSON defaults on conflict.
    pub fn prepare(&self, path: &str, options: RequestOptions) -> HttpRequest {
        let mut headers = default_headers();
        headers.extend(options.headers);

        HttpRequest {
            method: options.method,
            url: self.origins.url_for(OriginKind::Local, path),
            headers,
            body: options.body,
            credentials: options.credentials.unwrap_or(self.credentials),
        }
    }

    pub async fn fetch(&self, path: &str, options: RequestOptions) -> Result<T::Response> {
        let request_id = Uuid::new_v4();
        let span = info_span!("smart_fetch", %request_id, method = %options.method, path);

        self.fetch_with_fallback(request_id, path, options)
            .instrument(span)
            .await
    }

    pub async fn get(&self, path: &str) -> Result<T::Response> {
        self.fetch(path, RequestOptions::get()).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T::Response> {
        let options = RequestOptions::post().json(body)?;
        self.fetch(path, options).await
    }

    async fn fetch_with_fallback(
        &self,
        request_id: Uuid,
        path: &str,
        options: RequestOptions,
    ) -> Result<T::Response> {
        let local_request = self.prepare(path, options);

        let local_error = match self.attempt(request_id, OriginKind::Local, &local_request).await {
            Ok(response) => return Ok(response),
            Err(error) => error,
        };
        self.observer.fallback(request_id, &local_error);

        let production_request =
            local_request.retarget(self.origins.url_for(OriginKind::Production, path));

        match self
            .attempt(request_id, OriginKind::Production, &production_request)
            .await
        {
            Ok(response) => Ok(response),
            Err(production) => {
                self.observer.exhausted(request_id, &production);
                Err(GatewayError::Unreachable {
                    local: local_error,
                    production,
                })
            }
        }
    }

    async fn attempt(
        &self,
        request_id: Uuid,
        origin: OriginKind,
        request: &HttpRequest,
    ) -> std::result::Result<T::Response, crate::network::TransportError> {
        self.observer.attempt(request_id, origin, request);
        let started = Instant::now();

        let response = self.transport.send(request).await?;
        self.observer.completed(request_id, origin, started.elapsed());
        Ok(response)
    }
}
