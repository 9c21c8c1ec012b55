//! Probe and build metadata endpoints
//!
//! Liveness answers as long as the process serves requests. Readiness runs a
//! known-good batch through the validator and reports the limits requests are
//! held to.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::config::Config;
use crate::validator::validate_and_summarise;

/// Outcome of a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Failing,
}

impl ProbeStatus {
    fn status_code(self) -> StatusCode {
        match self {
            ProbeStatus::Ok => StatusCode::OK,
            ProbeStatus::Failing => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// `GET /healthz` body
#[derive(Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: ProbeStatus,
    pub timestamp: DateTime<Utc>,
}

/// `GET /readyz` body
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
    pub status: ProbeStatus,
    pub max_body_bytes: usize,
    /// 0 when batches are unbounded
    pub max_events: usize,
    pub timestamp: DateTime<Utc>,
}

/// `GET /build` body, filled in at compile time
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// `GIT_COMMIT` at build time, if set
    pub commit: Option<&'static str>,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            commit: option_env!("GIT_COMMIT"),
        }
    }
}

/// Run one valid event through the validator and expect it to be accepted
fn validator_self_check() -> ProbeStatus {
    let batch = json!([{
        "timestamp": "2026-01-28T10:15:00Z",
        "vehicleId": "READY0001",
        "type": "IGNITION_ON",
        "value": 1
    }]);

    match validate_and_summarise(&batch).summary {
        Some(summary) if summary.total_events == 1 => ProbeStatus::Ok,
        _ => {
            tracing::error!("Validator rejected the readiness batch");
            ProbeStatus::Failing
        },
    }
}

/// Liveness probe
///
/// # Example
/// ```text
/// GET /healthz
/// ```
pub async fn health_check() -> Response {
    Json(LivenessResponse {
        status: ProbeStatus::Ok,
        timestamp: Utc::now(),
    })
    .into_response()
}

/// Readiness probe
///
/// # Example
/// ```text
/// GET /readyz
/// ```
pub async fn ready_check(State(config): State<Arc<Config>>) -> Response {
    let status = validator_self_check();

    let response = ReadinessResponse {
        status,
        max_body_bytes: config.limits.max_body_bytes,
        max_events: config.limits.max_events,
        timestamp: Utc::now(),
    };

    (status.status_code(), Json(response)).into_response()
}

/// Build metadata
pub async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo::current())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LimitsConfig, ServerConfig};

    fn config() -> Arc<Config> {
        Arc::new(Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                log_level: "info".to_string(),
                environment: "test".to_string(),
                request_timeout_secs: 30,
            },
            limits: LimitsConfig {
                max_body_bytes: 2048,
                max_events: 0,
            },
        })
    }

    #[test]
    fn test_self_check_passes() {
        assert_eq!(validator_self_check(), ProbeStatus::Ok);
    }

    #[test]
    fn test_probe_status_codes() {
        assert_eq!(ProbeStatus::Ok.status_code(), StatusCode::OK);
        assert_eq!(
            ProbeStatus::Failing.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_ready_check_reports_limits() {
        let response = ready_check(State(config())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["maxBodyBytes"], 2048);
        assert_eq!(json["maxEvents"], 0);
    }

    #[test]
    fn test_build_info() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "event-validator");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }
}
