//! Health endpoints
//!
//! `/health` and `/health/live` only prove the process answers. `/health/ready`
//! also pings the configured user store and reports which driver backs it.

use crate::config::StoreDriver;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::time::Instant;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreProbe,
}

/// Outcome of pinging the user store
#[derive(Debug, Serialize)]
pub struct StoreProbe {
    pub driver: StoreDriver,
    pub reachable: bool,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn health_check() -> Json<Health> {
    Json(Health {
        status: "healthy",
        version: VERSION,
    })
}

pub async fn liveness_check() -> Json<Health> {
    Json(Health {
        status: "alive",
        version: VERSION,
    })
}

/// 503 until the user store answers
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let started = Instant::now();
    let outcome = state.users().health_check().await;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let store = StoreProbe {
        driver: state.config().database.driver,
        reachable: outcome.is_ok(),
        latency_ms,
        error: outcome.err().map(|e| e.to_string()),
    };

    let (code, status) = if store.reachable {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    (
        code,
        Json(Readiness {
            status,
            version: VERSION,
            store,
        }),
    )
}
