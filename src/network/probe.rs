// file: src/network/probe.rs
// description: reachability probe for both api origins
// reference: health checks built on utils::telemetry

use crate::models::RequestOptions;
use crate::network::observer::OriginKind;
use crate::network::smart_fetch::SmartFetch;
use crate::network::transport::Transport;
use crate::utils::{HealthCheck, HealthReport};
use std::time::Instant;
use tracing::info;

/// Lets the probe read a status code off whatever a transport returns.
pub trait ResponseStatus {
    fn status_code(&self) -> u16;
}

impl ResponseStatus for reqwest::Response {
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }
}

impl ResponseStatus for u16 {
    fn status_code(&self) -> u16 {
        *self
    }
}

impl<T> SmartFetch<T>
where
    T: Transport,
    T::Response: ResponseStatus,
{
    /// GETs `health_path` on each origin directly, without fallback.
    /// Both probes run concurrently.
    pub async fn probe(&self, health_path: &str) -> HealthReport {
        let (local, production) = futures::join!(
            self.probe_origin(OriginKind::Local, health_path),
            self.probe_origin(OriginKind::Production, health_path),
        );

        let report = HealthReport::new(
            vec![local, production],
            env!("CARGO_PKG_VERSION").to_string(),
        );
        info!("Origin probe finished: {:?}", report.overall_status);
        report
    }

    async fn probe_origin(&self, origin: OriginKind, health_path: &str) -> HealthCheck {
        let request = self
            .prepare(health_path, RequestOptions::get())
            .retarget(self.origins().url_for(origin, health_path));
        let component = origin.to_string();
        let started = Instant::now();

        match self.transport().send(&request).await {
            Ok(response) => {
                let status = response.status_code();
                if (200..300).contains(&status) {
                    HealthCheck::healthy(&component, &request.url, started.elapsed())
                } else {
                    HealthCheck::degraded(
                        &component,
                        &request.url,
                        format!("HTTP {}", status),
                        started.elapsed(),
                    )
                }
            }
            Err(error) => HealthCheck::unhealthy(
                &component,
                &request.url,
                error.to_string(),
                started.elapsed(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::smart_fetch::Origins;
    use crate::network::transport::{HttpRequest, TransportError, TransportErrorKind};
    use crate::utils::HealthStatus;

    /// Answers by origin prefix so concurrent probes stay deterministic.
    struct ByOrigin {
        local: std::result::Result<u16, TransportErrorKind>,
        production: std::result::Result<u16, TransportErrorKind>,
    }

    impl Transport for ByOrigin {
        type Response = u16;

        async fn send(&self, request: &HttpRequest) -> std::result::Result<u16, TransportError> {
            let outcome = if request.url.starts_with("http://local.test") {
                self.local
            } else {
                self.production
            };
            outcome.map_err(|kind| TransportError::new(&request.url, kind, "probe failure"))
        }
    }

    fn fetcher(
        local: std::result::Result<u16, TransportErrorKind>,
        production: std::result::Result<u16, TransportErrorKind>,
    ) -> SmartFetch<ByOrigin> {
        SmartFetch::with_transport(
            ByOrigin { local, production },
            Origins::new("http://local.test", "https://prod.test"),
        )
    }

    #[tokio::test]
    async fn test_both_healthy() {
        let report = fetcher(Ok(200), Ok(204)).probe("/api/health").await;
        assert_eq!(report.overall_status, HealthStatus::Healthy);
        assert_eq!(report.checks[0].component, "local");
        assert_eq!(report.checks[0].url, "http://local.test/api/health");
        assert_eq!(report.checks[1].component, "production");
        assert_eq!(report.checks[1].url, "https://prod.test/api/health");
    }

    #[tokio::test]
    async fn test_local_down_production_erroring() {
        let report = fetcher(Err(TransportErrorKind::Connect), Ok(503))
            .probe("/api/health")
            .await;

        assert_eq!(report.checks[0].status, HealthStatus::Unhealthy);
        assert_eq!(report.checks[1].status, HealthStatus::Degraded);
        assert_eq!(report.checks[1].message.as_deref(), Some("HTTP 503"));
        assert_eq!(report.overall_status, HealthStatus::Unhealthy);
        assert!(report.any_reachable());
    }
}
