//! Storefront wiring shared by every front end.

use std::sync::Arc;

use maison_core::{OrderId, OrderStatus};

use crate::api::{Catalog, MockApi};
use crate::checkout::{self, CheckoutError};
use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::models::{Order, ShippingAddress};
use crate::notify::Notifier;
use crate::services::{AuthService, OrderService, ProductService};
use crate::storage::{FileStorage, Storage, StorageError};
use crate::stores::{AuthStore, CartStore};

/// Storefront state shared by all callers.
///
/// This struct is cheaply cloneable via `Arc` and owns the configuration,
/// storage backend and services. Stores are built from it per session.
#[derive(Clone)]
pub struct Storefront {
    inner: Arc<StorefrontInner>,
}

struct StorefrontInner {
    config: StorefrontConfig,
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    products: ProductService,
    auth: AuthService,
    orders: OrderService,
}

impl Storefront {
    /// Create a storefront over the demo catalog.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_catalog(config, storage, notifier, Catalog::demo())
    }

    /// Create a storefront over a custom catalog.
    #[must_use]
    pub fn with_catalog(
        config: StorefrontConfig,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
        catalog: Catalog,
    ) -> Self {
        let api = MockApi::new(catalog, config.latency_profile());
        let products = ProductService::new(api.clone(), &config.cache);
        let auth = AuthService::new(api.clone(), storage.clone());
        let orders = OrderService::new(storage.clone());

        Self {
            inner: Arc::new(StorefrontInner {
                config,
                storage,
                notifier,
                products,
                auth,
                orders,
            }),
        }
    }

    /// Create a storefront persisting to `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the data directory cannot be created.
    pub fn open(
        config: StorefrontConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, StorageError> {
        let storage = FileStorage::open(&config.data_dir)?;
        tracing::debug!(dir = %storage.dir().display(), "Opened storage");
        Ok(Self::new(config, Arc::new(storage), notifier))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the product service.
    #[must_use]
    pub fn products(&self) -> &ProductService {
        &self.inner.products
    }

    /// Get the auth service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Get the order service.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }

    /// Restore the cart from storage.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if storage cannot be read.
    pub fn cart_store(&self) -> Result<CartStore, StorageError> {
        CartStore::load(self.inner.storage.clone(), self.inner.notifier.clone())
    }

    /// Restore the auth state from storage.
    #[must_use]
    pub fn auth_store(&self) -> AuthStore {
        AuthStore::load(self.inner.auth.clone(), self.inner.notifier.clone())
    }

    /// Place an order for the cart's contents.
    ///
    /// # Errors
    ///
    /// See [`checkout::checkout`].
    pub fn checkout(
        &self,
        cart: &mut CartStore,
        auth: &AuthStore,
        shipping_address: ShippingAddress,
        payment_method: &str,
    ) -> Result<Order, CheckoutError> {
        checkout::checkout(
            cart,
            auth,
            &self.inner.orders,
            self.inner.notifier.as_ref(),
            shipping_address,
            payment_method,
        )
    }

    /// Change an order's status on behalf of `auth`'s user.
    ///
    /// Returns `Ok(None)` if no order has that id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Forbidden` unless the session is an administrator,
    /// or `AppError::Storage` if the order history cannot be written.
    pub fn update_order_status(
        &self,
        auth: &AuthStore,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, AppError> {
        if !auth.is_admin() {
            tracing::warn!(order_id = %id, "Refused order status change for non-admin");
            return Err(AppError::Forbidden(
                "only administrators can change order status".to_string(),
            ));
        }

        Ok(self.inner.orders.update_order_status(id, status)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::storage::MemoryStorage;

    fn test_config() -> StorefrontConfig {
        StorefrontConfig {
            simulate_latency: false,
            ..StorefrontConfig::default()
        }
    }

    #[tokio::test]
    async fn test_stores_share_storage() {
        let storefront = Storefront::new(
            test_config(),
            Arc::new(MemoryStorage::new()),
            Arc::new(RecordingNotifier::new()),
        );

        let product = storefront
            .products()
            .get_product_by_id(&"2".into())
            .await
            .unwrap();
        let mut cart = storefront.cart_store().unwrap();
        cart.add_item(&product, 1).unwrap();

        assert_eq!(storefront.cart_store().unwrap().item_count(), 1);
        assert!(!storefront.auth_store().is_authenticated());
    }

    #[test]
    fn test_open_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            data_dir: dir.path().join("state"),
            ..test_config()
        };

        let storefront = Storefront::open(config, Arc::new(RecordingNotifier::new())).unwrap();
        assert!(dir.path().join("state").is_dir());
        assert!(storefront.orders().get_orders().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_order_status_requires_admin() {
        let storefront = Storefront::new(
            test_config(),
            Arc::new(MemoryStorage::new()),
            Arc::new(RecordingNotifier::new()),
        );
        let product = storefront
            .products()
            .get_product_by_id(&"3".into())
            .await
            .unwrap();
        let mut cart = storefront.cart_store().unwrap();
        cart.add_item(&product, 1).unwrap();

        let mut shopper = storefront.auth_store();
        assert!(shopper.login("pat@shop.com", "secret").await);
        let address = ShippingAddress {
            name: "Pat".to_string(),
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
            country: "USA".to_string(),
            phone: "555-0100".to_string(),
        };
        let order = storefront
            .checkout(&mut cart, &shopper, address, "card")
            .unwrap();

        let err = storefront
            .update_order_status(&shopper, &order.id, OrderStatus::Cancelled)
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        shopper.logout();
        let err = storefront
            .update_order_status(&shopper, &order.id, OrderStatus::Cancelled)
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let stored = storefront.orders().get_order_by_id(&order.id).unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::Pending);
    }
}
