//! Request and response types for the Udagram users API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Auth Types
// ============================================================================

/// Registration request
///
/// Fields are optional so that a missing value is reported as a bad
/// request by the service rather than rejected by the JSON extractor.
/// A field of the wrong JSON type counts as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub password: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Public view of a user account.
///
/// This is the only user data embedded in tokens and auth responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub email: String,
}

/// Response returned after a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Response returned after a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub auth: bool,
    pub token: String,
    pub user: PublicUser,
}

/// Session verification acknowledgment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub auth: bool,
    pub message: String,
}

// ============================================================================
// User Types
// ============================================================================

/// User record as returned by lookup-by-id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&UserResponse> for PublicUser {
    fn from(user: &UserResponse) -> Self {
        Self {
            email: user.email.clone(),
        }
    }
}
