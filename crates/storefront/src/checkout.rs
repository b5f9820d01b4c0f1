//! Order placement from the cart.

use thiserror::Error;
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::models::{Notice, Order, ShippingAddress};
use crate::notify::Notifier;
use crate::services::OrderService;
use crate::storage::StorageError;
use crate::stores::{AuthStore, CartStore};

/// Reasons an order could not be placed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("You must be logged in to check out")]
    NotAuthenticated,

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Turn the current cart into a pending order and empty the cart.
///
/// The order holds a snapshot of the cart lines. The cart is only emptied
/// once the order has been written. Once the order is stored it is returned
/// even if the emptied cart cannot be persisted; that failure is logged.
///
/// # Errors
///
/// Returns `CheckoutError::NotAuthenticated` without a logged-in user,
/// `CheckoutError::EmptyCart` if there is nothing to order, or
/// `CheckoutError::Storage` if the order cannot be persisted.
#[instrument(skip_all, fields(lines = cart.items().len()))]
pub fn checkout(
    cart: &mut CartStore,
    auth: &AuthStore,
    orders: &OrderService,
    notifier: &dyn Notifier,
    shipping_address: ShippingAddress,
    payment_method: &str,
) -> Result<Order, CheckoutError> {
    if !auth.is_authenticated() {
        return Err(CheckoutError::NotAuthenticated);
    }
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let order = orders.create_order(cart.items(), shipping_address, payment_method)?;
    if let Err(e) = cart.empty() {
        tracing::warn!(
            order_id = %order.id,
            error = %e,
            "Order placed but cart could not be cleared"
        );
    }

    add_breadcrumb("checkout", "Placed order", Some(&[("order_id", order.id.as_str())]));
    notifier.notify(Notice::info(
        "Order placed",
        format!("Order {} has been placed. Total: {}", order.id, order.total),
    ));

    Ok(order)
}
