//! CLI subcommands.
//!
//! Every command reports through `tracing`; store notices are logged by
//! [`LogNotifier`](maison_storefront::notify::LogNotifier).

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod orders;
pub mod products;

use maison_storefront::models::{CartItem, Order, Product};

fn log_product(product: &Product) {
    tracing::info!(
        id = %product.id,
        category = %product.category,
        featured = product.featured,
        "{} - {}",
        product.name,
        product.price
    );
}

fn log_line(item: &CartItem) {
    tracing::info!(
        id = %item.product.id,
        quantity = item.quantity,
        unit_price = %item.product.price,
        "{} - {}",
        item.product.name,
        item.line_total()
    );
}

fn log_order(order: &Order) {
    tracing::info!(
        id = %order.id,
        status = %order.status,
        created = %order.created.to_rfc3339(),
        lines = order.items.len(),
        "Order total {}",
        order.total
    );
}
