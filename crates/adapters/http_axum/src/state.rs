//! Shared application state for axum handlers.

use std::sync::Arc;

use tienda_app::ports::ProductCatalog;
use tienda_app::services::catalog_service::CatalogService;

/// Application state shared across all axum handlers.
///
/// Generic over the catalog type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the catalog itself does not need to be `Clone`;
/// only the `Arc` wrapper is cloned.
pub struct AppState<C> {
    /// Catalog read service.
    pub catalog_service: Arc<CatalogService<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            catalog_service: Arc::clone(&self.catalog_service),
        }
    }
}

impl<C> AppState<C>
where
    C: ProductCatalog + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(catalog_service: CatalogService<C>) -> Self {
        Self {
            catalog_service: Arc::new(catalog_service),
        }
    }
}
