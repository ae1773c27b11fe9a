// file: src/utils/telemetry.rs
// description: health reporting for the configured api origins
// reference: Production observability best practices

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Health status for an origin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    fn icon(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "✓",
            HealthStatus::Degraded => "⚠",
            HealthStatus::Unhealthy => "✗",
        }
    }
}

/// Health check result for one origin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub component: String,
    pub url: String,
    pub status: HealthStatus,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthCheck {
    pub fn healthy(component: &str, url: &str, response_time: Duration) -> Self {
        Self::with_status(component, url, HealthStatus::Healthy, None, response_time)
    }

    pub fn degraded(component: &str, url: &str, message: String, response_time: Duration) -> Self {
        Self::with_status(component, url, HealthStatus::Degraded, Some(message), response_time)
    }

    pub fn unhealthy(component: &str, url: &str, message: String, response_time: Duration) -> Self {
        Self::with_status(component, url, HealthStatus::Unhealthy, Some(message), response_time)
    }

    fn with_status(
        component: &str,
        url: &str,
        status: HealthStatus,
        message: Option<String>,
        response_time: Duration,
    ) -> Self {
        Self {
            component: component.to_string(),
            url: url.to_string(),
            status,
            message,
            response_time_ms: response_time.as_millis() as u64,
        }
    }
}

/// Combined report over every probed origin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub overall_status: HealthStatus,
    pub checks: Vec<HealthCheck>,
    pub timestamp: i64,
    pub version: String,
}

impl HealthReport {
    /// Overall status is the worst of the individual checks.
    pub fn new(checks: Vec<HealthCheck>, version: String) -> Self {
        let overall_status = checks
            .iter()
            .map(|c| c.status)
            .max()
            .unwrap_or(HealthStatus::Healthy);

        Self {
            overall_status,
            checks,
            timestamp: chrono::Utc::now().timestamp(),
            version,
        }
    }

    /// The fallback layer still serves requests as long as one origin answers.
    pub fn any_reachable(&self) -> bool {
        self.checks
            .iter()
            .any(|c| c.status != HealthStatus::Unhealthy)
    }

    pub fn format(&self) -> String {
        let mut output = format!(
            "{} API Health: {:?}\n\
             Version: {}\n\
             Timestamp: {}\n\n",
            self.overall_status.icon(),
            self.overall_status,
            self.version,
            chrono::DateTime::from_timestamp(self.timestamp, 0)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );

        for check in &self.checks {
            output.push_str(&format!(
                "{} {} {} ({:?}) - {}ms",
                check.status.icon(),
                check.component,
                check.url,
                check.status,
                check.response_time_ms
            ));

            if let Some(ref msg) = check.message {
                output.push_str(&format!("\n  {}", msg));
            }

            output.push('\n');
        }

        output
    }
}
