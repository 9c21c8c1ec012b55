//! Batch validation endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::Timer;
use crate::report;
use crate::validator::validate_and_summarise;

/// Response body format
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// The outcome as JSON
    #[default]
    Json,
    /// Rendered report lines, one per line
    Text,
}

/// Query parameters for the validation endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ValidateParams {
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Validate a batch of events submitted as raw JSON text
///
/// Responds 200 with the summary when every event is valid, 422 with the
/// error list otherwise, and 400 when the body is not JSON.
///
/// # Example
/// ```text
/// POST /api/v1/events/validate?format=text
/// ```
pub async fn validate_events(
    State(config): State<Arc<Config>>,
    Query(params): Query<ValidateParams>,
    body: String,
) -> Result<Response> {
    let input: Value = match serde_json::from_str(&body) {
        Ok(input) => input,
        Err(e) if params.format == ResponseFormat::Text => {
            tracing::warn!(error = %e, "Rejected body that is not JSON");
            return Ok((StatusCode::BAD_REQUEST, report::INVALID_JSON_LINE).into_response());
        },
        Err(e) => return Err(Error::invalid_json(e.to_string())),
    };

    if let Some(items) = input.as_array() {
        config.limits.check_batch_len(items.len())?;
    }

    let timer = Timer::start("validate_and_summarise");
    let outcome = validate_and_summarise(&input);
    timer.stop();

    let status = match &outcome.summary {
        Some(summary) => {
            tracing::info!(
                total_events = summary.total_events,
                unique_vehicles = summary.unique_vehicle_count,
                "Batch accepted"
            );
            StatusCode::OK
        },
        None => {
            tracing::warn!(errors = outcome.errors.len(), "Batch rejected");
            StatusCode::UNPROCESSABLE_ENTITY
        },
    };

    let response = match params.format {
        ResponseFormat::Json => (status, Json(outcome)).into_response(),
        ResponseFormat::Text => (status, report::render(&outcome).join("\n")).into_response(),
    };

    Ok(response)
}
