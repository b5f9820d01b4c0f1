//! Integration tests for the Maison storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p maison-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart behavior across reloads
//! - `auth_flow` - Mock login, registration and logout
//! - `checkout_flow` - Order placement and order history

use std::sync::Arc;

use maison_core::{Price, ProductId};
use maison_storefront::Storefront;
use maison_storefront::config::StorefrontConfig;
use maison_storefront::models::{Product, ShippingAddress};
use maison_storefront::notify::RecordingNotifier;
use maison_storefront::storage::{FileStorage, MemoryStorage, Storage};

/// A storefront plus handles on its storage and notices.
pub struct TestContext {
    pub storefront: Storefront,
    pub storage: Arc<dyn Storage>,
    pub notices: Arc<RecordingNotifier>,
}

impl TestContext {
    /// Storefront over in-memory storage with no simulated latency.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()))
    }

    /// Storefront over a directory, as the CLI uses it.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be opened.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn in_dir(dir: &std::path::Path) -> Self {
        let storage = FileStorage::open(dir).expect("Failed to open file storage");
        Self::with_storage(Arc::new(storage))
    }

    /// Storefront over the given storage.
    #[must_use]
    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        let notices = Arc::new(RecordingNotifier::new());
        let storefront = Storefront::new(test_config(), storage.clone(), notices.clone());
        Self {
            storefront,
            storage,
            notices,
        }
    }

    /// Fetch a demo product.
    ///
    /// # Panics
    ///
    /// Panics if the product is not in the demo catalog.
    #[allow(clippy::expect_used)]
    pub async fn product(&self, id: &str) -> Product {
        self.storefront
            .products()
            .get_product_by_id(&ProductId::new(id))
            .await
            .expect("demo product exists")
    }
}

/// Configuration with simulated latency disabled.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        simulate_latency: false,
        ..StorefrontConfig::default()
    }
}

/// A complete shipping address.
#[must_use]
pub fn shipping_address() -> ShippingAddress {
    ShippingAddress {
        name: "Jane Doe".to_string(),
        street: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62701".to_string(),
        country: "US".to_string(),
        phone: "555-0100".to_string(),
    }
}

/// Dollars and cents as a price.
#[must_use]
pub fn dollars(cents: i64) -> Price {
    Price::from_cents(cents)
}
