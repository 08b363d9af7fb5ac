//! # tienda-adapter-catalog-json
//!
//! Catalog adapter backed by a JSON file.
//!
//! ## Responsibilities
//! - Read the catalog export (a JSON array of product rows) once at startup
//! - Drop rows that cannot be addressed (blank `product_id`) and warn about
//!   other suspicious rows without hiding them
//! - Implement the `ProductCatalog` port defined in `tienda-app::ports`
//!
//! ## Dependency rule
//! Depends on `tienda-app` (for the port trait) and `tienda-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod catalog;
mod error;

pub use catalog::JsonCatalog;
pub use error::CatalogFileError;
