//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the user store and the auth primitives.

pub mod user;

pub use user::UserService;
