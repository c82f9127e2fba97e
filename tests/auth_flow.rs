//! End-to-end authentication flow against the in-memory user store.

use std::sync::Arc;

use chrono::Duration;
use taska_auth::AuthError;
use taska_auth::AuthService;
use taska_auth::FixedClock;
use taska_auth::HashParams;
use taska_auth::InMemoryUserStore;
use taska_auth::PasswordHasher;
use taska_auth::TokenError;
use taska_auth::TokenManager;

const SECRET: &[u8] = b"integration_secret_32_bytes_long!!";

fn fast_hasher() -> PasswordHasher {
    PasswordHasher::with_params(HashParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
        salt_length: 16,
        key_length: 32,
    })
}

fn setup() -> (AuthService<InMemoryUserStore, Arc<FixedClock>>, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::at(1_700_000_000));

    let hasher = fast_hasher();
    let store = Arc::new(InMemoryUserStore::new());
    store
        .insert(
            "alice@example.com",
            42,
            hasher.hash("password123").unwrap(),
        )
        .unwrap();

    let service = AuthService::new(
        store,
        hasher,
        TokenManager::with_clock(SECRET, Duration::seconds(3600), clock.clone()),
    );

    (service, clock)
}

#[tokio::test]
async fn test_login_validate_refresh_logout() {
    let (service, clock) = setup();

    let token = service
        .login("alice@example.com", "password123")
        .await
        .expect("Login failed");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);

    assert_eq!(service.validate_token(&token.access_token).unwrap(), 42);

    clock.advance(60);
    let refreshed = service
        .refresh_token(&token.access_token)
        .expect("Refresh failed");
    assert_eq!(service.validate_token(&refreshed.access_token).unwrap(), 42);

    // Logout succeeds but revokes nothing
    service.logout(&refreshed.access_token).unwrap();
    assert!(service.validate_token(&refreshed.access_token).is_ok());
}

#[tokio::test]
async fn test_session_expires() {
    let (service, clock) = setup();

    let token = service
        .login("alice@example.com", "password123")
        .await
        .unwrap();

    clock.advance(3600);
    assert!(matches!(
        service.validate_token(&token.access_token),
        Err(AuthError::Token(TokenError::Expired))
    ));
    assert!(matches!(
        service.refresh_token(&token.access_token),
        Err(AuthError::Token(TokenError::Expired))
    ));
}

#[tokio::test]
async fn test_refresh_extends_the_session() {
    let (service, clock) = setup();

    let token = service
        .login("alice@example.com", "password123")
        .await
        .unwrap();

    // Refresh just before expiry, then cross the original boundary
    clock.advance(3599);
    let refreshed = service.refresh_token(&token.access_token).unwrap();

    clock.advance(2);
    assert!(matches!(
        service.validate_token(&token.access_token),
        Err(AuthError::Token(TokenError::Expired))
    ));
    assert!(service.validate_token(&refreshed.access_token).is_ok());
}

#[tokio::test]
async fn test_enumeration_resistance() {
    let (service, _) = setup();

    let unknown = service
        .login("nonexistent@x.com", "anything")
        .await
        .unwrap_err();
    let wrong = service
        .login("alice@example.com", "wrongpass")
        .await
        .unwrap_err();

    assert!(matches!(unknown, AuthError::InvalidCredentials));
    assert!(matches!(wrong, AuthError::InvalidCredentials));
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn test_token_from_another_secret_is_rejected() {
    let (service, _) = setup();

    let foreign = TokenManager::with_clock(
        b"some_other_secret_32_bytes_long!!!",
        Duration::seconds(3600),
        FixedClock::at(1_700_000_000),
    )
    .create_token(42)
    .unwrap();

    assert!(matches!(
        service.validate_token(&foreign.access_token),
        Err(AuthError::Token(TokenError::SignatureInvalid))
    ));
}
