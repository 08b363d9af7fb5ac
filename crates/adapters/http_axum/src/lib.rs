//! # tienda-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **storefront pages** rendered server-side with askama: the
//!   catalog grid of product cards and the product detail page
//! - Serve a **JSON API** over the catalog (`/api/products`, …)
//! - Serve the static assets the cards rely on (placeholder image, stylesheet)
//! - Map application results into HTTP responses (HTML or JSON)
//!
//! ## Image fallbacks without a client bundle
//! The SSR cards carry inline `onerror` handlers: the thumbnail swaps to the
//! placeholder once, the name icon hides itself. Both mirror the transitions
//! of `tienda_domain::image`.
//!
//! ## Dependency rule
//! Depends on `tienda-app` (for the port trait and services) and
//! `tienda-domain` (for domain types used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod assets;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
