//! Maison Core - Shared types library.
//!
//! This crate provides common types used across all Maison components:
//! - `storefront` - Catalog, cart, auth and order logic over local storage
//! - `cli` - Command-line front end driving the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! simulated network calls. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
