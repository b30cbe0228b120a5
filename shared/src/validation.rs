//! Input validation functions
//!
//! Email syntax is checked with the `validator` crate's HTML5-style rules.

use validator::ValidateEmail;

/// Rejection message for a bad email on login
pub const LOGIN_EMAIL_MESSAGE: &str = "Email is required or malformed.";

/// Rejection message for a bad email on registration
pub const REGISTER_EMAIL_MESSAGE: &str = "Email is missing or malformed.";

/// Validate a required email field.
///
/// Returns the email on success so callers can chain on the borrowed value.
/// The error carries [`LOGIN_EMAIL_MESSAGE`]; use [`validate_new_email`]
/// for registration.
pub fn validate_email(email: Option<&str>) -> Result<&str, String> {
    match email {
        Some(email) if !email.is_empty() && email.validate_email() => Ok(email),
        _ => Err(LOGIN_EMAIL_MESSAGE.to_string()),
    }
}

/// Validate the email of an account being registered
pub fn validate_new_email(email: Option<&str>) -> Result<&str, String> {
    validate_email(email).map_err(|_| REGISTER_EMAIL_MESSAGE.to_string())
}

/// Validate a required password field.
///
/// Only presence is enforced; strength rules are out of scope.
pub fn validate_password(password: Option<&str>) -> Result<&str, String> {
    match password {
        Some(password) if !password.is_empty() => Ok(password),
        _ => Err("Password is required.".to_string()),
    }
}
