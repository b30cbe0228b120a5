//! JWT token issuance and verification
//!
//! Tokens are HS256-signed and carry only the public view of the account.
//! Nothing is stored server-side; a token is valid exactly when its
//! signature checks out against the process secret and it has not expired.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use udagram_shared::{AuthError, PublicUser};

/// JWT claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account email (the public view)
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp), present only when expiry is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn public_view(&self) -> PublicUser {
        PublicUser {
            email: self.email.clone(),
        }
    }
}

/// Pre-computed JWT keys
///
/// Derived once from the secret at startup and shared behind `Arc`.
#[derive(Clone)]
struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: Arc::new(EncodingKey::from_secret(bytes)),
            decoding: Arc::new(DecodingKey::from_secret(bytes)),
        }
    }
}

/// Token service for issuing and verifying bearer tokens
///
/// Cheap to clone; build it once and keep it in `AppState`.
#[derive(Clone)]
pub struct TokenService {
    keys: JwtKeys,
    expiry_secs: Option<i64>,
    validation: Arc<Validation>,
}

impl TokenService {
    /// Create a token service for `secret`.
    ///
    /// With `expiry_secs` set, issued tokens carry an `exp` claim and tokens
    /// without one are rejected.
    pub fn new(secret: &SecretString, expiry_secs: Option<i64>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        if expiry_secs.is_some() {
            validation.set_required_spec_claims(&["exp"]);
        }
        validation.leeway = 0;

        Self {
            keys: JwtKeys::new(secret),
            expiry_secs,
            validation: Arc::new(validation),
        }
    }

    /// Issue a signed token for an account's public view
    pub fn issue(&self, user: &PublicUser) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: self
                .expiry_secs
                .map(|secs| (now + Duration::seconds(secs)).timestamp()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Verify a token's signature and expiry and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.keys.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    AuthError::InvalidSignature
                }
                _ => AuthError::Malformed,
            })
    }

    /// Configured token lifetime, if any
    #[inline]
    pub fn expiry_secs(&self) -> Option<i64> {
        self.expiry_secs
    }
}
