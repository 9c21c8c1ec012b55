//! Event Validator Library
//!
//! Validates batches of vehicle telemetry events and summarises the batches
//! that pass. The core is [`validate_and_summarise`]; the `api` module exposes
//! it over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod validator;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use error::{Error, Result};

// Re-export model types
pub use models::{Event, EventType, Summary, ValidationError, ValidationErrorKind};
pub use validator::{validate_and_summarise, ValidationOutcome};

// Re-export API server functions
pub use api::server::{create_router, create_server, shutdown_signal};

// Re-export probe types
pub use api::{BuildInfo, LivenessResponse, ProbeStatus, ReadinessResponse};
