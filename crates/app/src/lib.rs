//! # tienda-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that catalog adapters must implement:
//!   - `ProductCatalog`: read access to catalog products
//! - Define the **use-case** struct driving the storefront:
//!   - `CatalogService`: list products, look one up, build product cards
//!
//! ## Dependency rule
//! Depends on `tienda-domain` only. Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
