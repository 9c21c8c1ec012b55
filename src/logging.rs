//! Tracing subscriber setup and timing helper

use std::time::{Duration, Instant};

use tracing_subscriber::{fmt, fmt::format::FmtSpan, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Multi-line, human-readable
    Pretty,
}

impl LogFormat {
    pub fn for_environment(environment: &str) -> Self {
        if environment.eq_ignore_ascii_case("production") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Filter used when `RUST_LOG` is unset
fn default_filter(log_level: &str) -> String {
    format!(
        "{}={},tower_http=debug",
        env!("CARGO_CRATE_NAME"),
        log_level.to_lowercase()
    )
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `log_level`.
pub fn init_tracing(log_level: &str, environment: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(log_level)));
    let format = LogFormat::for_environment(environment);

    let (json, pretty) = match format {
        LogFormat::Json => (
            Some(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE),
            ),
            None,
        ),
        LogFormat::Pretty => (
            None,
            Some(fmt::layer().pretty().with_span_events(FmtSpan::CLOSE)),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .try_init()
        .map_err(|e| Error::internal(format!("Failed to initialize tracing: {}", e)))?;

    tracing::info!(?format, log_level, environment, "Logging initialized");

    Ok(())
}

/// Logs how long an operation took once stopped
pub struct Timer {
    operation: &'static str,
    started: Instant,
}

impl Timer {
    pub fn start(operation: &'static str) -> Self {
        Timer {
            operation,
            started: Instant::now(),
        }
    }

    pub fn stop(self) -> Duration {
        let elapsed = self.started.elapsed();
        tracing::debug!(
            operation = self.operation,
            elapsed_us = elapsed.as_micros() as u64,
            "Timed operation finished"
        );
        elapsed
    }
}
