//! Router assembly and server lifecycle

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, MatchedPath},
    http::{header, HeaderName, Method, Request},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::{info, Level, Span};
use uuid::Uuid;

use crate::api::events::validate_events;
use crate::api::health::{build_info, health_check, ready_check};
use crate::api::API_VERSION;
use crate::config::Config;
use crate::error::{Error, Result};

/// Header carrying the per-request id, set when the client sent none
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Issues a random v4 uuid per request
#[derive(Clone, Copy, Default)]
struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        Uuid::new_v4()
            .to_string()
            .parse()
            .ok()
            .map(RequestId::new)
    }
}

fn request_span(request: &Request<Body>) -> Span {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or("unmatched");
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "request",
        method = %request.method(),
        route,
        request_id,
    )
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build the application router
///
/// The validation route is limited to `max_body_bytes`; every route gets the
/// request timeout, CORS, a request id and a trace span.
pub fn create_router(config: Arc<Config>) -> Router {
    let validate_route = format!("/api/{}/events/validate", API_VERSION);
    let body_limit = DefaultBodyLimit::max(config.limits.max_body_bytes);
    let timeout = TimeoutLayer::new(config.server.request_timeout());

    Router::new()
        .route("/healthz", get(health_check))
        .route("/readyz", get(ready_check))
        .route("/build", get(build_info))
        .route(&validate_route, post(validate_events).layer(body_limit))
        .with_state(config)
        .layer(timeout)
        .layer(cors())
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        // Outermost, so the trace span and the response both see the id
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, UuidRequestId))
}

/// Bind to the configured address and serve until a shutdown signal arrives
pub async fn create_server(config: Arc<Config>) -> Result<()> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| Error::config(format!("Invalid server address: {}", e)))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    info!(address = %addr, environment = %config.server.environment, "Listening");

    axum::serve(listener, create_router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::internal(format!("Server error: {}", e)))
}

/// Resolves on Ctrl+C, or SIGTERM on unix
///
/// A handler that fails to install is logged and never fires.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    };
    info!(signal, "Shutting down");
}
