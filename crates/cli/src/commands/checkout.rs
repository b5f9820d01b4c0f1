//! Checkout command.

use clap::Args;

use maison_storefront::Storefront;
use maison_storefront::error::AppError;
use maison_storefront::models::ShippingAddress;

use super::log_order;

#[derive(Args)]
pub struct CheckoutArgs {
    /// Recipient name
    #[arg(long)]
    name: String,

    #[arg(long)]
    street: String,

    #[arg(long)]
    city: String,

    #[arg(long)]
    state: String,

    /// Postal code
    #[arg(long)]
    zip: String,

    #[arg(long)]
    country: String,

    #[arg(long)]
    phone: String,

    /// Payment method label
    #[arg(long, default_value = "credit_card")]
    payment: String,
}

impl From<CheckoutArgs> for ShippingAddress {
    fn from(args: CheckoutArgs) -> Self {
        Self {
            name: args.name,
            street: args.street,
            city: args.city,
            state: args.state,
            zip_code: args.zip,
            country: args.country,
            phone: args.phone,
        }
    }
}

/// Place an order for the current cart.
///
/// # Errors
///
/// Returns an error if nobody is logged in, the cart is empty, or storage
/// fails.
pub fn run(storefront: &Storefront, args: CheckoutArgs) -> Result<(), AppError> {
    let mut cart = storefront.cart_store()?;
    let auth = storefront.auth_store();

    let payment = args.payment.clone();
    let order = storefront.checkout(&mut cart, &auth, args.into(), &payment)?;
    log_order(&order);
    Ok(())
}
