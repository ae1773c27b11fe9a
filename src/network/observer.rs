// file: src/network/observer.rs
// description: pluggable diagnostics for fetch attempts and fallbacks
// reference: https://docs.rs/tracing

use crate::network::transport::{HttpRequest, TransportError};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginKind {
    Local,
    Production,
}

impl fmt::Display for OriginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginKind::Local => f.write_str("local"),
            OriginKind::Production => f.write_str("production"),
        }
    }
}

/// Receives fetch lifecycle events. Every hook defaults to doing nothing.
pub trait FetchObserver: Send + Sync {
    fn attempt(&self, _request_id: Uuid, _origin: OriginKind, _request: &HttpRequest) {}

    fn completed(&self, _request_id: Uuid, _origin: OriginKind, _elapsed: Duration) {}

    /// The local origin could not be reached; production is tried next.
    fn fallback(&self, _request_id: Uuid, _error: &TransportError) {}

    /// Production failed too; the call is about to return an error.
    fn exhausted(&self, _request_id: Uuid, _error: &TransportError) {}
}

/// Emits every event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn attempt(&self, request_id: Uuid, origin: OriginKind, request: &HttpRequest) {
        debug!(%request_id, %origin, method = %request.method, url = %request.url, "Sending request");
    }

    fn completed(&self, request_id: Uuid, origin: OriginKind, elapsed: Duration) {
        debug!(
            %request_id,
            %origin,
            "Response received in {:.2}ms",
            elapsed.as_secs_f64() * 1000.0
        );
    }

    fn fallback(&self, request_id: Uuid, error: &TransportError) {
        warn!(%request_id, "Local API unreachable, falling back to production: {}", error);
    }

    fn exhausted(&self, request_id: Uuid, error: &TransportError) {
        error!(%request_id, "Production API unreachable: {}", error);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl FetchObserver for NoopObserver {}
