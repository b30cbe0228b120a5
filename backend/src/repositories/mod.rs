//! User stores
//!
//! Provides the persistence capability used by the account operations,
//! with Postgres and in-memory implementations.

pub mod memory;
pub mod user;

pub use memory::InMemoryUserStore;
pub use user::{NewUser, PgUserStore, StoreError, UserRecord, UserStore};
