//! In-memory user store
//!
//! Used by tests and by `database.driver = "memory"` for local runs
//! without Postgres. Contents are lost on restart.

use super::user::{NewUser, StoreError, UserRecord, UserStore};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<HashMap<String, UserRecord>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, UserRecord>> {
        // A panic while holding the lock cannot leave a half-written entry
        self.users.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.lock().get(email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        match self.lock().entry(user.email) {
            Entry::Occupied(entry) => Err(StoreError::Duplicate(entry.key().clone())),
            Entry::Vacant(entry) => {
                let now = Utc::now();
                let record = UserRecord {
                    email: entry.key().clone(),
                    password_hash: user.password_hash,
                    created_at: now,
                    updated_at: now,
                };
                Ok(entry.insert(record).clone())
            }
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = InMemoryUserStore::new();
        assert!(store.is_empty());

        let created = store.insert(new_user("a@b.com")).await.unwrap();
        let found = store.find_by_email("a@b.com").await.unwrap().unwrap();

        assert_eq!(created.email, found.email);
        assert_eq!(found.password_hash, "hash");
        assert!(store.find_by_email("c@d.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_insert_rejected() {
        let store = InMemoryUserStore::new();
        store.insert(new_user("a@b.com")).await.unwrap();

        let err = store.insert(new_user("a@b.com")).await.unwrap_err();

        assert!(matches!(err, StoreError::Duplicate(email) if email == "a@b.com"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_single_winner() {
        let store = InMemoryUserStore::new();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(new_user("race@b.com")).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }
}
