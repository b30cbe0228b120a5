//! Authentication routes
//!
//! Registration, login, and session verification under `/users/auth`.
//! Paths are registered with and without the trailing slash.

use super::extract::ApiJson;
use crate::auth::{require_auth, AuthUser};
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use tracing::debug;
use udagram_shared::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, VerificationResponse,
};

/// Create auth routes
pub fn auth_routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/users/auth/verification", get(verification))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/users/auth", post(register).get(dead_end))
        .route("/users/auth/", post(register).get(dead_end))
        .route("/users/auth/login", post(login))
        .merge(protected)
}

/// Register a new user
///
/// POST /api/v0/users/auth/
async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let response = UserService::register(
        state.users(),
        state.tokens(),
        req.email.as_deref(),
        req.password.as_deref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
///
/// POST /api/v0/users/auth/login
async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = UserService::login(
        state.users(),
        state.tokens(),
        req.email.as_deref(),
        req.password.as_deref(),
    )
    .await?;
    Ok(Json(response))
}

/// Check that the caller holds a valid token
///
/// GET /api/v0/users/auth/verification
///
/// # Authentication
/// Requires valid Bearer token in Authorization header.
async fn verification(user: AuthUser) -> Json<VerificationResponse> {
    debug!(email = %user.claims.email, "session verified");
    Json(VerificationResponse {
        auth: true,
        message: "Authenticated.".to_string(),
    })
}

async fn dead_end() -> &'static str {
    "auth"
}
