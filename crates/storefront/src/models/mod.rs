//! Domain models for the storefront.
//!
//! Plain value records with no invariants beyond their shape. Everything
//! here serializes whole into storage; an [`Order`] snapshots its
//! [`CartItem`]s by value, so later catalog changes never rewrite history.

pub mod cart;
pub mod notice;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{CartItem, CartSummary};
pub use notice::{Notice, NoticeVariant};
pub use order::{Order, ShippingAddress};
pub use product::{Category, Product, ProductQuery};
pub use user::{AuthToken, Session, User};
