//! User domain types.
//!
//! The demo has no accounts: a "user" is whatever email last passed the mock
//! login check, and the admin role is derived from the email suffix alone.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use maison_core::Email;

/// The logged-in user record persisted under the `user` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User's email address.
    pub email: Email,
    /// Whether the email ends with `@admin.com`.
    pub is_admin: bool,
}

impl User {
    /// Build the user record for an accepted email.
    #[must_use]
    pub fn from_email(email: Email) -> Self {
        let is_admin = email.is_admin();
        Self { email, is_admin }
    }
}

/// Opaque token fabricated by the mock login.
///
/// Implements `Debug` through `SecretString`, which redacts the value.
#[derive(Debug, Clone)]
pub struct AuthToken(SecretString);

impl AuthToken {
    /// Wrap a token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// The raw token, for persisting to storage.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// A successful login: the fabricated token plus the derived user record.
#[derive(Debug, Clone)]
pub struct Session {
    /// Token to persist under `authToken`.
    pub token: AuthToken,
    /// User record to persist under `user`.
    pub user: User,
}
