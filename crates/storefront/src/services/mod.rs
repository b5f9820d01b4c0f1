//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `products` - Catalog reads with in-memory caching
//! - `auth` - Mock login/registration and the persisted session
//! - `orders` - Order history persisted to storage

pub mod auth;
pub mod orders;
pub mod products;

pub use auth::{AuthError, AuthService};
pub use orders::OrderService;
pub use products::ProductService;
