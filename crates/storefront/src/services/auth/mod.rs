//! Authentication service.
//!
//! Forwards login and registration to the mock API and owns the persisted
//! session (`authToken` and `user` keys). None of this is a security model:
//! any password of sufficient length is accepted for any email.

mod error;

pub use error::AuthError;

use std::sync::Arc;

use tracing::instrument;

use maison_core::Email;

use crate::api::MockApi;
use crate::models::{AuthToken, Session, User};
use crate::storage::{self, Storage, StorageError, keys};

/// Authentication service.
#[derive(Clone)]
pub struct AuthService {
    api: MockApi,
    storage: Arc<dyn Storage>,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(api: MockApi, storage: Arc<dyn Storage>) -> Self {
        Self { api, storage }
    }

    /// Log in with email and password.
    ///
    /// Does not persist anything; call [`save_session`](Self::save_session)
    /// with the result.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` if the mock API rejects the credentials.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let token = self.api.login(email, password).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Login rejected");
        })?;

        let user = User::from_email(Email::parse(email)?);
        Ok(Session { token, user })
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` if the mock API rejects the registration.
    #[instrument(skip(self, password))]
    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<(), AuthError> {
        self.api
            .register(email, password, name)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Registration rejected"))?;
        Ok(())
    }

    /// Persist a session's token and user record.
    ///
    /// If the user record cannot be written the token is removed again, so a
    /// failed save never leaves a token without a user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if either write fails.
    pub fn save_session(&self, session: &Session) -> Result<(), StorageError> {
        self.storage
            .set(keys::AUTH_TOKEN, session.token.expose())?;
        storage::save_json(self.storage.as_ref(), keys::USER, &session.user).inspect_err(|_| {
            if let Err(e) = self.storage.remove(keys::AUTH_TOKEN) {
                tracing::warn!(error = %e, "Failed to roll back stored token");
            }
        })
    }

    /// Whether a token is stored.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.stored_token().is_some()
    }

    /// The stored token, if any.
    #[must_use]
    pub fn stored_token(&self) -> Option<AuthToken> {
        match self.storage.get(keys::AUTH_TOKEN) {
            Ok(token) => token.map(AuthToken::new),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read auth token");
                None
            }
        }
    }

    /// The stored user record, if any.
    ///
    /// A malformed record is logged and treated as logged out.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        storage::load_json::<Option<User>>(self.storage.as_ref(), keys::USER)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to read user data");
                None
            })
    }

    /// Clear the stored token and user record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if either key cannot be removed.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.storage.remove(keys::AUTH_TOKEN)?;
        self.storage.remove(keys::USER)
    }
}
