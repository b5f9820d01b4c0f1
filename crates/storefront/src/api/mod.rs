//! Mock storefront API.
//!
//! # Architecture
//!
//! - Serves an in-memory [`Catalog`] instead of a remote backend
//! - Every operation waits a fixed [`LatencyProfile`] delay first
//! - Login and registration are syntactic checks only; nothing is verified
//!   against stored credentials and the returned token is a constant string
//!
//! # Example
//!
//! ```rust,ignore
//! use maison_storefront::api::{Catalog, LatencyProfile, MockApi};
//!
//! let api = MockApi::new(Catalog::demo(), LatencyProfile::default());
//! let featured = api.get_featured_products().await;
//! let session = api.login("someone@admin.com", "hunter22").await?;
//! ```

mod catalog;
mod latency;

pub use catalog::Catalog;
pub use latency::LatencyProfile;

use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use maison_core::{CategoryId, Email, ProductId};

use crate::models::{AuthToken, Category, Product};

/// Minimum password length accepted by the mock login and registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Token handed out for `@admin.com` logins.
pub const ADMIN_TOKEN: &str = "mock-jwt-token-for-admin-user";

/// Token handed out for every other accepted login.
pub const USER_TOKEN: &str = "mock-jwt-token-for-regular-user";

/// Failures reported by the mock API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No product with the requested ID.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Login rejected.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration rejected.
    #[error("Invalid email or password (must be at least 6 characters)")]
    InvalidRegistration,
}

/// Mock API client.
///
/// Cheap to clone; clones share the same catalog.
#[derive(Clone)]
pub struct MockApi {
    inner: Arc<MockApiInner>,
}

struct MockApiInner {
    catalog: Catalog,
    latency: LatencyProfile,
}

impl MockApi {
    /// Create a mock API over a catalog.
    #[must_use]
    pub fn new(catalog: Catalog, latency: LatencyProfile) -> Self {
        Self {
            inner: Arc::new(MockApiInner { catalog, latency }),
        }
    }

    /// Get all products, optionally restricted to a category.
    ///
    /// `None` or the "All Products" category returns everything; an unknown
    /// category returns an empty list.
    #[instrument(skip(self))]
    pub async fn get_products(&self, category_id: Option<&CategoryId>) -> Vec<Product> {
        latency::simulate(self.inner.latency.products).await;
        self.inner.catalog.in_category(category_id)
    }

    /// Get featured products.
    #[instrument(skip(self))]
    pub async fn get_featured_products(&self) -> Vec<Product> {
        latency::simulate(self.inner.latency.featured_products).await;
        self.inner.catalog.featured()
    }

    /// Get a product by ID.
    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: &ProductId) -> Option<Product> {
        latency::simulate(self.inner.latency.product).await;
        self.inner.catalog.product(id).cloned()
    }

    /// Get all categories.
    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Vec<Category> {
        latency::simulate(self.inner.latency.categories).await;
        self.inner.catalog.categories().to_vec()
    }

    /// Mock login.
    ///
    /// Accepts any email containing `@` with a password of at least
    /// [`MIN_PASSWORD_LENGTH`] UTF-16 code units. Emails ending in `@admin.com` get
    /// the admin token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidCredentials` if either check fails.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthToken, ApiError> {
        latency::simulate(self.inner.latency.login).await;

        let email = Email::parse(email).map_err(|_| ApiError::InvalidCredentials)?;
        if !password_long_enough(password) {
            return Err(ApiError::InvalidCredentials);
        }

        let token = if email.is_admin() {
            ADMIN_TOKEN
        } else {
            USER_TOKEN
        };
        Ok(AuthToken::new(token))
    }

    /// Mock registration.
    ///
    /// Nothing is stored; a later login does not depend on having registered.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRegistration` if the email has no `@` or the
    /// password is too short.
    #[instrument(skip(self, password))]
    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<(), ApiError> {
        latency::simulate(self.inner.latency.register).await;

        if Email::parse(email).is_err() || !password_long_enough(password) {
            return Err(ApiError::InvalidRegistration);
        }

        tracing::debug!(name, "Accepted mock registration");
        Ok(())
    }
}

// Length in UTF-16 code units, matching how browser clients count it.
fn password_long_enough(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LENGTH
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn api() -> MockApi {
        MockApi::new(Catalog::demo(), LatencyProfile::none())
    }

    #[tokio::test]
    async fn test_admin_login() {
        let token = api().login("root@admin.com", "secret").await.unwrap();
        assert_eq!(token.expose(), ADMIN_TOKEN);
    }

    #[tokio::test]
    async fn test_regular_login() {
        let token = api().login("jane@example.com", "secret").await.unwrap();
        assert_eq!(token.expose(), USER_TOKEN);
    }

    #[tokio::test]
    async fn test_short_password_fails_for_any_email() {
        let api = api();
        assert_eq!(
            api.login("root@admin.com", "12345").await.unwrap_err(),
            ApiError::InvalidCredentials
        );
        assert_eq!(
            api.login("jane@example.com", "12345").await.unwrap_err(),
            ApiError::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn test_password_length_counts_utf16_units() {
        let api = api();
        // Three astral characters are six UTF-16 units.
        assert!(api.login("jane@example.com", "\u{1F600}\u{1F600}\u{1F600}").await.is_ok());
        assert_eq!(
            api.login("jane@example.com", "ab\u{1F600}").await.unwrap_err(),
            ApiError::InvalidCredentials
        );
        assert!(api.register("jane@example.com", "caf\u{e9}\u{e9}s", "Jane").await.is_ok());
    }

    #[tokio::test]
    async fn test_login_requires_at_symbol() {
        assert_eq!(
            api().login("jane.example.com", "secret").await.unwrap_err(),
            ApiError::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn test_register() {
        let api = api();
        assert!(api.register("jane@example.com", "secret", "Jane").await.is_ok());
        assert_eq!(
            api.register("jane@example.com", "short", "Jane").await,
            Err(ApiError::InvalidRegistration)
        );
        assert_eq!(
            api.register("jane", "long enough", "Jane").await,
            Err(ApiError::InvalidRegistration)
        );
    }

    #[tokio::test]
    async fn test_product_by_id() {
        let api = api();
        let lamp = api.get_product_by_id(&ProductId::new("1")).await.unwrap();
        assert_eq!(lamp.name, "Minimal Desk Lamp");
        assert!(api.get_product_by_id(&ProductId::new("nope")).await.is_none());
    }

    #[tokio::test]
    async fn test_get_products_by_category() {
        let api = api();
        let lighting = api.get_products(Some(&CategoryId::new("3"))).await;
        assert_eq!(lighting.len(), 1);
        assert_eq!(api.get_categories().await.len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let api = MockApi::new(Catalog::demo(), LatencyProfile::default());

        let start = tokio::time::Instant::now();
        let _ = api.get_products(None).await;
        assert!(start.elapsed() >= Duration::from_millis(500));

        let start = tokio::time::Instant::now();
        let _ = api.login("jane@example.com", "secret").await;
        assert!(start.elapsed() >= Duration::from_millis(800));
    }
}
