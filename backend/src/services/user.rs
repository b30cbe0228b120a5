//! User service for registration, login, and lookup
//!
//! # Performance
//!
//! - Password hashing/verification runs on the blocking thread pool
//! - Token service is passed by reference (pre-computed keys)

use crate::auth::{PasswordService, TokenService};
use crate::error::ApiError;
use crate::repositories::{NewUser, UserStore};
use tracing::{info, instrument, warn};
use udagram_shared::validation::{validate_email, validate_new_email, validate_password};
use udagram_shared::{LoginResponse, RegisterResponse, UserResponse};

/// User service for account operations
pub struct UserService;

impl UserService {
    /// Register a new account and issue its first token
    ///
    /// The existence pre-check gives the common case a clean error; the
    /// store's own uniqueness guarantee settles concurrent registrations.
    #[instrument(skip(store, tokens, password))]
    pub async fn register(
        store: &dyn UserStore,
        tokens: &TokenService,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<RegisterResponse, ApiError> {
        let email = validate_new_email(email).map_err(ApiError::BadRequest)?;
        let password = validate_password(password).map_err(ApiError::BadRequest)?;

        if store.find_by_email(email).await?.is_some() {
            warn!("registration rejected: account exists");
            return Err(ApiError::Conflict("User already exists.".to_string()));
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(password.to_string()).await?;

        let user = store
            .insert(NewUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        let public = user.public_view();
        let token = tokens.issue(&public)?;

        info!("user registered");
        Ok(RegisterResponse {
            token,
            user: public,
        })
    }

    /// Check credentials and issue a token
    #[instrument(skip(store, tokens, password))]
    pub async fn login(
        store: &dyn UserStore,
        tokens: &TokenService,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<LoginResponse, ApiError> {
        let email = validate_email(email).map_err(ApiError::BadRequest)?;
        let password = validate_password(password).map_err(ApiError::BadRequest)?;

        let user = store.find_by_email(email).await?.ok_or_else(|| {
            warn!("login rejected: unknown account");
            ApiError::Unauthorized("User was not found..".to_string())
        })?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid =
            PasswordService::verify_async(password.to_string(), user.password_hash.clone())
                .await?;

        if !valid {
            warn!("login rejected: bad credentials");
            return Err(ApiError::Unauthorized("Password was invalid.".to_string()));
        }

        let public = user.public_view();
        let token = tokens.issue(&public)?;

        info!("user logged in");
        Ok(LoginResponse {
            auth: true,
            token,
            user: public,
        })
    }

    /// Fetch an account by primary key
    pub async fn find_by_id(store: &dyn UserStore, id: &str) -> Result<UserResponse, ApiError> {
        store
            .find_by_email(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }
}
