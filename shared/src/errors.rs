//! Error types for the Udagram application

use thiserror::Error;

/// Token verification failures.
///
/// All variants are surfaced to callers as an authentication failure;
/// the distinction exists for logging and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,
}

impl AuthError {
    /// Stable machine-readable name, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::Malformed => "malformed",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::Expired => "expired",
        }
    }
}
