use std::sync::Arc;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::jwt::Token;
use crate::jwt::TokenError;
use crate::jwt::TokenManager;
use crate::password::PasswordHasher;
use crate::store::StoreError;
use crate::store::UserStore;

/// Authentication service errors.
///
/// `login` collapses every credential failure into `InvalidCredentials`
/// so callers cannot distinguish an unknown identifier from a wrong
/// password.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Failed to issue token: {0}")]
    TokenIssuance(#[source] TokenError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("User store error: {0}")]
    Store(#[from] StoreError),
}

/// Authentication coordinator combining the user store, password
/// verification, and token management.
pub struct AuthService<S, C = SystemClock>
where
    S: UserStore,
    C: Clock,
{
    user_store: Arc<S>,
    password_hasher: PasswordHasher,
    token_manager: TokenManager<C>,
}

impl<S, C> AuthService<S, C>
where
    S: UserStore,
    C: Clock,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `user_store` - Credential lookup implementation
    /// * `password_hasher` - Configured password hasher
    /// * `token_manager` - Configured token manager
    ///
    /// # Returns
    /// AuthService instance
    pub fn new(
        user_store: Arc<S>,
        password_hasher: PasswordHasher,
        token_manager: TokenManager<C>,
    ) -> Self {
        Self {
            user_store,
            password_hasher,
            token_manager,
        }
    }

    /// Authenticate a user and issue a bearer token.
    ///
    /// # Arguments
    /// * `identifier` - Login identifier (e.g. an email address)
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Freshly issued token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identifier, wrong password, or
    ///   an unverifiable stored record; the variants are indistinguishable
    /// * `TokenIssuance` - Token could not be signed
    /// * `Store` - The user store backend failed
    pub async fn login(&self, identifier: &str, password: &str) -> Result<Token, AuthError> {
        let credentials = match self.user_store.find_by_identifier(identifier).await? {
            Some(credentials) => credentials,
            None => {
                tracing::debug!("Login rejected: unknown identifier");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let matches = match self
            .password_hasher
            .verify(password, &credentials.credential_record)
        {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!("Credential verification failed: {}", e);
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !matches {
            tracing::debug!("Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        self.token_manager
            .create_token(credentials.subject_id)
            .map_err(AuthError::TokenIssuance)
    }

    /// Log out a bearer token.
    ///
    /// Tokens are self-contained and there is no revocation list, so
    /// this is a no-op: the token remains usable until its expiry.
    /// True revocation requires a deny-list collaborator outside this
    /// crate.
    pub fn logout(&self, _token: &str) -> Result<(), AuthError> {
        Ok(())
    }

    /// Validate a token and return the subject identifier.
    ///
    /// # Errors
    /// Token validation errors propagate unchanged inside `AuthError::Token`.
    pub fn validate_token(&self, token: &str) -> Result<u64, AuthError> {
        Ok(self.token_manager.validate_token(token)?)
    }

    /// Validate a token and issue a fresh one for the same subject.
    ///
    /// # Errors
    /// Token validation errors propagate unchanged inside `AuthError::Token`.
    pub fn refresh_token(&self, token: &str) -> Result<Token, AuthError> {
        Ok(self.token_manager.refresh_token(token)?)
    }
}
