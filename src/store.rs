use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use thiserror::Error;

/// Subject identifier and stored credential record for one user.
#[derive(Debug, Clone)]
pub struct StoredCredentials {
    /// Subject identifier embedded in issued tokens
    pub subject_id: u64,
    /// Encoded credential record, opaque outside the password hasher
    pub credential_record: String,
}

/// Error type for user store operations.
///
/// Covers backend failures only; a missing user is `Ok(None)`, never
/// an error.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("User store backend error: {0}")]
    Backend(String),
}

/// Port for looking up stored credentials by login identifier.
///
/// The production implementation lives with the caller (a database
/// repository, a directory client); this crate ships an in-memory
/// implementation for tests and examples.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Look up a user by login identifier.
    ///
    /// # Arguments
    /// * `identifier` - Login identifier (e.g. an email address)
    ///
    /// # Returns
    /// Stored credentials, or None if no such user exists
    ///
    /// # Errors
    /// * `Backend` - The underlying store failed
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<StoredCredentials>, StoreError>;
}

/// In-memory user store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, StoredCredentials>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user under a login identifier.
    ///
    /// Replaces any existing entry for the same identifier.
    ///
    /// # Arguments
    /// * `identifier` - Login identifier
    /// * `subject_id` - Subject identifier for issued tokens
    /// * `credential_record` - Encoded record from the password hasher
    ///
    /// # Errors
    /// * `Backend` - The store lock is poisoned
    pub fn insert(
        &self,
        identifier: impl Into<String>,
        subject_id: u64,
        credential_record: impl Into<String>,
    ) -> Result<(), StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        users.insert(
            identifier.into(),
            StoredCredentials {
                subject_id,
                credential_record: credential_record.into(),
            },
        );
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<StoredCredentials>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(users.get(identifier).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryUserStore::new();
        store
            .insert("alice@example.com", 1, "$argon2id$record")
            .unwrap();

        let found = store
            .find_by_identifier("alice@example.com")
            .await
            .unwrap()
            .expect("User should exist");
        assert_eq!(found.subject_id, 1);
        assert_eq!(found.credential_record, "$argon2id$record");
    }

    #[tokio::test]
    async fn test_missing_user_is_none() {
        let store = InMemoryUserStore::new();

        let found = store.find_by_identifier("nobody@example.com").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_insert_replaces_existing() {
        let store = InMemoryUserStore::new();
        store.insert("alice@example.com", 1, "old").unwrap();
        store.insert("alice@example.com", 1, "new").unwrap();

        let found = store
            .find_by_identifier("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.credential_record, "new");
    }
}
