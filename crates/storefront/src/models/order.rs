//! Order domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maison_core::{OrderId, OrderStatus, Price};

use super::cart::CartItem;

/// Where an order ships to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub phone: String,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID (base36 timestamp plus a random suffix).
    pub id: OrderId,
    /// Line items copied from the cart at checkout.
    pub items: Vec<CartItem>,
    /// Sum of line totals at checkout.
    pub total: Price,
    /// Current status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub created: DateTime<Utc>,
    /// Destination address.
    pub shipping_address: ShippingAddress,
    /// Free-form payment method label (e.g., "card").
    pub payment_method: String,
}
