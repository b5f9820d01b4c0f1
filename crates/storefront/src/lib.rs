//! Maison storefront library.
//!
//! Catalog browsing, a persisted shopping cart, mock authentication and
//! order placement over a key/value storage backend. Front ends (the
//! `maison` CLI, tests) drive it through [`state::Storefront`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod services;
pub mod state;
pub mod storage;
pub mod stores;

pub use state::Storefront;
