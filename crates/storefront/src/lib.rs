//! Hardware Store Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused. The binary in `main.rs` adds
//! process concerns (Sentry guard, tracing subscriber, listener).
//!
//! # Architecture
//!
//! - Axum web framework with server-rendered Askama templates
//! - Static product catalog; per-session cart in tower-sessions
//! - Checkout submitted with one `reqwest` POST to an external endpoint
//! - Telemetry through an injected [`telemetry::TelemetrySink`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod telemetry;

use std::path::Path;

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

use state::AppState;

/// Build the storefront application router.
///
/// Includes all routes, the static file service, the session layer, and
/// request tracing. The Sentry tower layers are applied by the binary so
/// tests are not coupled to the SDK.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());
    let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");

    Router::new()
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(session_layer)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
