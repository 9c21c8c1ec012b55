//! HTTP surface of the event validator
//!
//! Routes, handlers and middleware that expose [`crate::validate_and_summarise`]
//! over axum.

pub mod events;
pub mod health;
pub mod server;

pub use events::{validate_events, ResponseFormat, ValidateParams};
pub use health::{
    build_info, health_check, ready_check, BuildInfo, LivenessResponse, ProbeStatus,
    ReadinessResponse,
};
pub use server::{create_router, create_server, shutdown_signal};

/// API version segment of the validation route
pub const API_VERSION: &str = "v1";
