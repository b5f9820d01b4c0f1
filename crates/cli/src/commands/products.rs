//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! maison products list --category 6 --min-price 50 --search vase
//! maison products featured
//! maison products show 2
//! maison categories
//! ```

use clap::Subcommand;

use maison_core::{CategoryId, Price, ProductId};
use maison_storefront::Storefront;
use maison_storefront::error::AppError;
use maison_storefront::models::ProductQuery;

use super::log_product;

#[derive(Subcommand)]
pub enum ProductAction {
    /// List products, optionally filtered
    List {
        /// Category ID ("1" is All Products)
        #[arg(short, long)]
        category: Option<CategoryId>,

        /// Lowest unit price, inclusive
        #[arg(long)]
        min_price: Option<String>,

        /// Highest unit price, inclusive
        #[arg(long)]
        max_price: Option<String>,

        /// Text to look for in the name or description
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List featured products
    Featured,
    /// Show one product
    Show {
        /// Product ID
        id: ProductId,
    },
}

/// Run a product subcommand.
///
/// # Errors
///
/// Returns an error if a price filter is malformed or the product is unknown.
pub async fn run(storefront: &Storefront, action: ProductAction) -> Result<(), AppError> {
    match action {
        ProductAction::List {
            category,
            min_price,
            max_price,
            search,
        } => {
            let query = ProductQuery {
                category,
                min_price: min_price.as_deref().map(Price::parse).transpose()?,
                max_price: max_price.as_deref().map(Price::parse).transpose()?,
                text: search,
            };

            let products = storefront.products().search(&query).await;
            if products.is_empty() {
                tracing::info!("No products found");
            }
            products.iter().for_each(log_product);
        }
        ProductAction::Featured => {
            storefront
                .products()
                .get_featured_products()
                .await
                .iter()
                .for_each(log_product);
        }
        ProductAction::Show { id } => {
            let product = storefront.products().get_product_by_id(&id).await?;
            log_product(&product);
            tracing::info!(image = %product.image, "{}", product.description);
        }
    }
    Ok(())
}

/// List every category.
pub async fn categories(storefront: &Storefront) {
    for category in storefront.products().get_categories().await {
        tracing::info!(id = %category.id, "{}", category.name);
    }
}
