//! Shopping cart commands.

use clap::Subcommand;

use maison_core::ProductId;
use maison_storefront::Storefront;
use maison_storefront::error::AppError;

use super::log_line;

#[derive(Subcommand)]
pub enum CartAction {
    /// Show cart lines and totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        id: ProductId,

        /// Number of units
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a line (0 removes it)
    Update {
        /// Product ID
        id: ProductId,

        /// New quantity
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Empty the cart
    Clear,
}

/// Run a cart subcommand.
///
/// # Errors
///
/// Returns an error if the product is unknown or the cart cannot be saved.
pub async fn run(storefront: &Storefront, action: CartAction) -> Result<(), AppError> {
    let mut cart = storefront.cart_store()?;

    match action {
        CartAction::Show => {
            if cart.is_empty() {
                tracing::info!("Your cart is empty");
                return Ok(());
            }

            cart.items().iter().for_each(log_line);
            let summary = cart.summary(storefront.config().tax_rate);
            tracing::info!(
                items = summary.item_count,
                subtotal = %summary.subtotal,
                tax = %summary.tax,
                "Total {}",
                summary.total
            );
        }
        CartAction::Add { id, quantity } => {
            let product = storefront.products().get_product_by_id(&id).await?;
            cart.add_item(&product, quantity)?;
        }
        CartAction::Update { id, quantity } => {
            if !cart.items().iter().any(|item| item.product.id == id) {
                return Err(AppError::NotFound(format!("cart line for product {id}")));
            }
            cart.update_quantity(&id, quantity)?;
        }
        CartAction::Remove { id } => cart.remove_item(&id)?,
        CartAction::Clear => cart.clear()?,
    }
    Ok(())
}
