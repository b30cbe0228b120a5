//! Authentication module
//!
//! Provides bcrypt password hashing, stateless JWT bearer tokens, and the
//! request gate built on them.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, TokenService};
pub use middleware::{authorize, require_auth, AuthUser};
pub use password::{PasswordService, HASH_COST};
