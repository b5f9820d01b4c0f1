//! Cart line items and totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use maison_core::Price;

use super::product::Product;

/// A product/quantity pair held in the cart.
///
/// The product is a snapshot taken when it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product snapshot.
    pub product: Product,
    /// Number of units, always at least 1 while the line exists.
    pub quantity: u32,
}

impl CartItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// Order summary shown next to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    /// Total units across all lines.
    pub item_count: u64,
    /// Sum of line totals.
    pub subtotal: Price,
    /// Tax on the subtotal.
    pub tax: Price,
    /// Subtotal plus tax.
    pub total: Price,
}

impl CartSummary {
    /// Compute a summary for a set of lines at the given tax rate.
    #[must_use]
    pub fn compute(items: &[CartItem], tax_rate: Decimal) -> Self {
        let subtotal = total_price(items);
        let tax = subtotal.percent(tax_rate);
        Self {
            item_count: item_count(items),
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// Total units across all lines.
#[must_use]
pub fn item_count(items: &[CartItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Sum of unit price times quantity, rounded to cents.
#[must_use]
pub fn total_price(items: &[CartItem]) -> Price {
    items.iter().map(CartItem::line_total).sum::<Price>().round_cents()
}
