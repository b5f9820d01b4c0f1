//! Order service.
//!
//! Orders are appended to the `user_orders` blob and rewritten wholesale on
//! every change. Each order carries its own copy of the cart lines.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::instrument;

use maison_core::{OrderId, OrderStatus, Price};

use crate::models::{CartItem, Order, ShippingAddress};
use crate::storage::{self, Storage, StorageError, keys};

/// Length of the random suffix appended to order IDs.
const ORDER_ID_SUFFIX_LEN: usize = 5;

/// Order history backed by storage.
#[derive(Clone)]
pub struct OrderService {
    storage: Arc<dyn Storage>,
}

impl OrderService {
    /// Create a new order service.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// All stored orders, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if storage cannot be read.
    pub fn get_orders(&self) -> Result<Vec<Order>, StorageError> {
        storage::load_json(self.storage.as_ref(), keys::ORDERS)
    }

    /// Place a new pending order for a snapshot of cart lines.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the order history cannot be written.
    #[instrument(skip(self, items, shipping_address), fields(lines = items.len()))]
    pub fn create_order(
        &self,
        items: &[CartItem],
        shipping_address: ShippingAddress,
        payment_method: &str,
    ) -> Result<Order, StorageError> {
        let created = Utc::now();
        let total = items
            .iter()
            .map(CartItem::line_total)
            .sum::<Price>()
            .round_cents();

        let order = Order {
            id: generate_order_id(created),
            items: items.to_vec(),
            total,
            status: OrderStatus::Pending,
            created,
            shipping_address,
            payment_method: payment_method.to_owned(),
        };

        let mut orders = self.get_orders()?;
        orders.push(order.clone());
        storage::save_json(self.storage.as_ref(), keys::ORDERS, &orders)?;

        tracing::info!(order_id = %order.id, total = %order.total, "Order created");
        Ok(order)
    }

    /// Look up an order by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if storage cannot be read.
    pub fn get_order_by_id(&self, id: &OrderId) -> Result<Option<Order>, StorageError> {
        Ok(self.get_orders()?.into_iter().find(|order| &order.id == id))
    }

    /// Replace an order's status, returning the updated order.
    ///
    /// Returns `Ok(None)` and writes nothing if the order does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if storage cannot be read or written.
    #[instrument(skip(self))]
    pub fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, StorageError> {
        let mut orders = self.get_orders()?;
        let Some(order) = orders.iter_mut().find(|order| &order.id == id) else {
            tracing::warn!("Order not found for status update");
            return Ok(None);
        };

        order.status = status;
        let updated = order.clone();
        storage::save_json(self.storage.as_ref(), keys::ORDERS, &orders)?;
        Ok(Some(updated))
    }
}

/// Base36 millisecond timestamp followed by a random uppercase base36 suffix.
fn generate_order_id(now: DateTime<Utc>) -> OrderId {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
    let mut id = to_base36(millis);

    let mut rng = rand::rng();
    id.extend((0..ORDER_ID_SUFFIX_LEN).filter_map(|_| {
        char::from_digit(rng.random_range(0..36), 36).map(|c| c.to_ascii_uppercase())
    }));

    OrderId::new(id)
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        #[allow(clippy::cast_possible_truncation)] // remainder is always < 36
        let digit = (value % 36) as u32;
        digits.extend(char::from_digit(digit, 36));
        value /= 36;
    }
    digits.iter().rev().collect()
}
