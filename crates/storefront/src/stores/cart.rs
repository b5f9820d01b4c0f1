//! Shopping cart store.
//!
//! Holds the cart lines for the session. The whole line list is written to
//! the `cart` key after every mutation, so a reload always sees the last
//! state. Panel visibility is session-only and never persisted.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::instrument;

use maison_core::{Price, ProductId};

use crate::error::add_breadcrumb;
use crate::models::{CartItem, CartSummary, Notice, Product, cart};
use crate::notify::Notifier;
use crate::storage::{self, Storage, StorageError, keys};

/// Shopping cart for one session.
pub struct CartStore {
    items: Vec<CartItem>,
    is_open: bool,
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("is_open", &self.is_open)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Restore the cart from storage.
    ///
    /// A malformed stored cart is logged and replaced by an empty one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if storage cannot be read at all.
    pub fn load(
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, StorageError> {
        let items: Vec<CartItem> = storage::load_json(storage.as_ref(), keys::CART)?;
        tracing::debug!(lines = items.len(), "Cart restored");

        Ok(Self {
            items,
            is_open: false,
            storage,
            notifier,
        })
    }

    /// Current cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        cart::item_count(&self.items)
    }

    /// Sum of unit price times quantity.
    #[must_use]
    pub fn total_price(&self) -> Price {
        cart::total_price(&self.items)
    }

    /// Subtotal, tax and total at the given rate.
    #[must_use]
    pub fn summary(&self, tax_rate: Decimal) -> CartSummary {
        CartSummary::compute(&self.items, tax_rate)
    }

    /// Add `quantity` units of a product.
    ///
    /// An existing line for the same product has its quantity increased;
    /// otherwise a new line is appended with a snapshot of the product.
    /// Adding zero units does nothing.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated cart cannot be persisted.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), StorageError> {
        if quantity == 0 {
            tracing::debug!("Ignoring add of zero units");
            return Ok(());
        }

        let notice = if let Some(line) = self.line_mut(&product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            Notice::info(
                "Cart updated",
                format!("{} quantity increased to {}", product.name, line.quantity),
            )
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity,
            });
            Notice::info("Added to cart", format!("{} added to your cart", product.name))
        };

        let quantity_str = quantity.to_string();
        add_breadcrumb(
            "cart",
            "Added item",
            Some(&[
                ("product_id", product.id.as_str()),
                ("quantity", quantity_str.as_str()),
            ]),
        );

        self.persist()?;
        self.notifier.notify(notice);
        Ok(())
    }

    /// Remove the line for a product, if present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<(), StorageError> {
        let Some(index) = self.items.iter().position(|i| &i.product.id == product_id) else {
            tracing::debug!("Product not in cart");
            return Ok(());
        };

        self.items.remove(index);
        add_breadcrumb(
            "cart",
            "Removed item",
            Some(&[("product_id", product_id.as_str())]),
        );

        self.persist()?;
        self.notifier.notify(Notice::info(
            "Item removed",
            "The item has been removed from your cart",
        ));
        Ok(())
    }

    /// Set the quantity of a line. A quantity below 1 removes the line.
    ///
    /// Unknown products are ignored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<(), StorageError> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        let Some(line) = self.line_mut(product_id) else {
            tracing::debug!("Product not in cart");
            return Ok(());
        };
        line.quantity = quantity;

        let quantity_str = quantity.to_string();
        add_breadcrumb(
            "cart",
            "Updated quantity",
            Some(&[
                ("product_id", product_id.as_str()),
                ("quantity", quantity_str.as_str()),
            ]),
        );

        self.persist()
    }

    /// Remove every line.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the empty cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.empty()?;
        add_breadcrumb("cart", "Cleared cart", None);
        self.notifier.notify(Notice::info(
            "Cart cleared",
            "All items have been removed from your cart",
        ));
        Ok(())
    }

    /// Empty the cart without notifying, used after an order is placed.
    pub(crate) fn empty(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        self.persist()
    }

    /// Show the cart panel.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the cart panel.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Flip cart panel visibility.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Whether the cart panel is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| &i.product.id == product_id)
    }

    fn persist(&self) -> Result<(), StorageError> {
        storage::save_json(self.storage.as_ref(), keys::CART, &self.items).inspect_err(|e| {
            tracing::error!(error = %e, "Failed to persist cart");
        })
    }
}
