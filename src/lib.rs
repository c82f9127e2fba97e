//! Identity and session core
//!
//! Issues, validates, and refreshes signed bearer tokens, and stores /
//! verifies user credentials with a memory-hard password hash:
//! - Password hashing (Argon2id, self-describing encoded records)
//! - JWT token issuance, validation, and refresh (HS256)
//! - Authentication orchestration over an injectable user store
//!
//! Routing, request binding, and persistence are left to callers; they
//! reach this core through the `UserStore` and `Clock` ports.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use taska_auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let record = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &record).unwrap());
//! assert!(!hasher.verify("wrong_password", &record).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use chrono::Duration;
//! use taska_auth::TokenManager;
//!
//! let manager = TokenManager::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let token = manager.create_token(42).unwrap();
//! assert_eq!(manager.validate_token(&token.access_token).unwrap(), 42);
//! ```
//!
//! ## Complete Login Flow
//! ```
//! use std::sync::Arc;
//!
//! use chrono::Duration;
//! use taska_auth::{AuthService, InMemoryUserStore, PasswordHasher, TokenManager};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let hasher = PasswordHasher::new();
//! let store = Arc::new(InMemoryUserStore::new());
//! store
//!     .insert("alice@example.com", 42, hasher.hash("password123").unwrap())
//!     .unwrap();
//!
//! let service = AuthService::new(
//!     store,
//!     hasher,
//!     TokenManager::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)),
//! );
//!
//! let token = service.login("alice@example.com", "password123").await.unwrap();
//! assert_eq!(service.validate_token(&token.access_token).unwrap(), 42);
//! # });
//! ```

pub mod clock;
pub mod config;
pub mod jwt;
pub mod password;
pub mod service;
pub mod store;

// Re-export commonly used items
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use config::AuthConfig;
pub use jwt::Claims;
pub use jwt::Token;
pub use jwt::TokenError;
pub use jwt::TokenManager;
pub use password::HashParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use service::AuthError;
pub use service::AuthService;
pub use store::InMemoryUserStore;
pub use store::StoreError;
pub use store::StoredCredentials;
pub use store::UserStore;
