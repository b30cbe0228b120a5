//! Route definitions for the Udagram users API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

mod auth;
mod extract;
mod health;
mod users;


pub use auth::auth_routes;
pub use users::user_routes;

/// Mount point of the versioned API
pub const API_PREFIX: &str = "/api/v0";

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.config().server.cors_origin.as_deref());

    Router::new()
        .route("/", get(|| async { "/api/v0/" }))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/api/v0/", get(version))
        .nest(API_PREFIX, api_routes(&state))
        // Apply middleware layers
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v0 routes
fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(version))
        .merge(auth::auth_routes(state))
        .merge(users::user_routes(state))
}

async fn version() -> &'static str {
    "V0"
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let allow_origin = match origin {
        None | Some("*") => AllowOrigin::any(),
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                warn!(origin, "invalid CORS origin; allowing any origin");
                AllowOrigin::any()
            }
        },
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::OPTIONS,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-access-token"),
            header::AUTHORIZATION,
        ])
}
