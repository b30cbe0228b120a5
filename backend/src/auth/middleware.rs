//! Authentication middleware
//!
//! Gates protected routes on a valid `Authorization: Bearer <token>` header.
//!
//! The check itself lives in [`authorize`]; [`require_auth`] applies it as a
//! route layer and stores the decoded claims for the [`AuthUser`] extractor.

use super::jwt::{Claims, TokenService};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

/// Authenticated caller, as decoded from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
}

/// Decide whether a request carrying `header` may proceed.
///
/// The header must be exactly `<scheme> <credential>` with scheme `Bearer`.
pub fn authorize(header: Option<&str>, tokens: &TokenService) -> Result<Claims, ApiError> {
    let header =
        header.ok_or_else(|| ApiError::Unauthorized("No authorization headers.".to_string()))?;

    let parts: Vec<&str> = header.split(' ').collect();
    let token = match parts.as_slice() {
        [scheme, token] if scheme.eq_ignore_ascii_case("bearer") => *token,
        _ => return Err(ApiError::Unauthorized("Malformed token.".to_string())),
    };

    tokens.verify(token).map_err(|e| {
        warn!(reason = e.kind(), "bearer token rejected");
        ApiError::Authentication(e)
    })
}

fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

/// Middleware function for authentication
///
/// Apply with `axum::middleware::from_fn_with_state` to a group of routes.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = authorize(authorization_header(request.headers()), state.tokens())?;
    debug!(email = %claims.email, "request authenticated");

    request.extensions_mut().insert(AuthUser { claims });

    Ok(next.run(request).await)
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only present when the route sits behind `require_auth`
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("No authorization headers.".to_string()))
    }
}
