//! Client-side state containers.
//!
//! Stores own mutable session state, write it through to storage on every
//! change and report outcomes as [`Notice`](crate::models::Notice)s.

pub mod auth;
pub mod cart;

pub use auth::AuthStore;
pub use cart::CartStore;
