//! User lookup routes

use crate::auth::require_auth;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    middleware,
    routing::get,
    Json, Router,
};
use udagram_shared::UserResponse;

/// Create user routes
///
/// Lookup is public unless `auth.protect_user_lookup` is set.
pub fn user_routes(state: &AppState) -> Router<AppState> {
    let router = Router::new().route("/users/:id", get(get_user));

    if state.config().auth.protect_user_lookup {
        router.route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
    } else {
        router
    }
}

/// Find a user by id (email)
///
/// GET /api/v0/users/:id
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::find_by_id(state.users(), &id).await?;
    Ok(Json(user))
}
