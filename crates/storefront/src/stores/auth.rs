//! Authentication store.
//!
//! Tracks the logged-in user for the session on top of [`AuthService`].
//! Outcomes are reported as notices; callers only learn success or failure.

use std::sync::Arc;

use tracing::instrument;

use crate::error::{add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::models::{Notice, User};
use crate::notify::Notifier;
use crate::services::AuthService;

/// Session authentication state.
pub struct AuthStore {
    user: Option<User>,
    service: AuthService,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl AuthStore {
    /// Restore the stored user, if any.
    #[must_use]
    pub fn load(service: AuthService, notifier: Arc<dyn Notifier>) -> Self {
        let user = service.current_user();
        if let Some(user) = &user {
            set_sentry_user(user.email.as_str());
        }

        Self {
            user,
            service,
            notifier,
        }
    }

    /// The logged-in user.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the logged-in user is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    /// Log in and persist the session.
    ///
    /// Returns `false` and emits a destructive notice when the credentials
    /// are rejected.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        let session = match self.service.login(email, password).await {
            Ok(session) => session,
            Err(e) => {
                self.notifier
                    .notify(Notice::destructive("Login failed", e.to_string()));
                return false;
            }
        };

        if let Err(e) = self.service.save_session(&session) {
            tracing::warn!(error = %e, "Failed to persist session");
        }

        let greeting = if session.user.is_admin {
            "Welcome back, admin!"
        } else {
            "Welcome back!"
        };

        set_sentry_user(session.user.email.as_str());
        add_breadcrumb("auth", "Logged in", None);
        tracing::info!(admin = session.user.is_admin, "User logged in");

        self.user = Some(session.user);
        self.notifier.notify(Notice::info("Login successful", greeting));
        true
    }

    /// Register a new account. Does not log in.
    #[instrument(skip(self, password))]
    pub async fn register(&mut self, email: &str, password: &str, name: &str) -> bool {
        match self.service.register(email, password, name).await {
            Ok(()) => {
                add_breadcrumb("auth", "Registered", None);
                self.notifier.notify(Notice::info(
                    "Registration successful",
                    "Your account has been created. You can now log in.",
                ));
                true
            }
            Err(e) => {
                self.notifier
                    .notify(Notice::destructive("Registration failed", e.to_string()));
                false
            }
        }
    }

    /// Forget the session and clear stored credentials.
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        if let Err(e) = self.service.logout() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }

        self.user = None;
        clear_sentry_user();
        add_breadcrumb("auth", "Logged out", None);
        self.notifier.notify(Notice::info(
            "Logged out",
            "You have been successfully logged out",
        ));
    }
}
