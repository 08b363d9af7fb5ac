//! Catalog port: read access to the product catalog.

use std::future::Future;

use tienda_domain::error::TiendaError;
use tienda_domain::id::ProductId;
use tienda_domain::product::Product;

/// Source of catalog [`Product`]s.
pub trait ProductCatalog {
    /// All products, in catalog order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, TiendaError>> + Send;

    /// A single product by identifier.
    fn get_by_id(
        &self,
        id: &ProductId,
    ) -> impl Future<Output = Result<Option<Product>, TiendaError>> + Send;
}
