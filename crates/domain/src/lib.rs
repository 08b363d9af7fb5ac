//! # tienda-domain
//!
//! Pure domain model for the tienda auto-parts storefront.
//!
//! ## Responsibilities
//! - Foundational types: product identifiers, error conventions
//! - Define the **Product** record as supplied by the catalog
//! - Classify inventory levels into a **stock status** and label it
//! - Format prices in Chilean pesos
//! - Describe the **product card** independently of any UI framework,
//!   including the image fallback rules
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod card;
pub mod image;
pub mod price;
pub mod product;
pub mod stock;
