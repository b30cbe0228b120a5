//! Udagram Shared Library
//!
//! This crate contains the wire types, token error taxonomy, and input
//! validation shared between the API server and its clients.

pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
