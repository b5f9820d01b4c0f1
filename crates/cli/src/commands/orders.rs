//! Order history commands.

use clap::Subcommand;

use maison_core::{OrderId, OrderStatus};
use maison_storefront::Storefront;
use maison_storefront::error::AppError;

use super::{log_line, log_order};

#[derive(Subcommand)]
pub enum OrderAction {
    /// List all orders
    List,
    /// Show one order with its lines
    Show {
        /// Order ID
        id: OrderId,
    },
    /// Change an order's status (admin only)
    Status {
        /// Order ID
        id: OrderId,

        /// pending, processing, completed or cancelled
        status: OrderStatus,
    },
}

/// Run an orders subcommand.
///
/// # Errors
///
/// Returns `AppError::NotFound` for unknown orders and `AppError::Forbidden`
/// when a non-admin changes a status.
pub fn run(storefront: &Storefront, action: OrderAction) -> Result<(), AppError> {
    let orders = storefront.orders();

    match action {
        OrderAction::List => {
            let all = orders.get_orders()?;
            if all.is_empty() {
                tracing::info!("No orders yet");
            }
            all.iter().for_each(log_order);
        }
        OrderAction::Show { id } => {
            let order = orders
                .get_order_by_id(&id)?
                .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

            log_order(&order);
            order.items.iter().for_each(log_line);
            let address = &order.shipping_address;
            tracing::info!(
                payment = %order.payment_method,
                "Ship to {}, {}, {}, {} {}, {}",
                address.name,
                address.street,
                address.city,
                address.state,
                address.zip_code,
                address.country
            );
        }
        OrderAction::Status { id, status } => {
            let order = storefront
                .update_order_status(&storefront.auth_store(), &id, status)?
                .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;
            log_order(&order);
        }
    }
    Ok(())
}
