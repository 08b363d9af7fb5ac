//! [`ProductCatalog`] implementation over an in-memory copy of the JSON file.

use std::collections::HashSet;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use tienda_app::ports::ProductCatalog;
use tienda_domain::error::{TiendaError, ValidationError};
use tienda_domain::id::ProductId;
use tienda_domain::product::Product;

use crate::error::CatalogFileError;

/// Read-only catalog loaded from a JSON array of product rows.
///
/// Cloning is cheap: clones share the same product list.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    products: Arc<Vec<Product>>,
}

impl JsonCatalog {
    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogFileError::Io`] if the file cannot be read, or
    /// [`CatalogFileError::Json`] if it is not an array of products.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogFileError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse the catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogFileError::Json`] if `json` is not an array of products.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogFileError> {
        let rows: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::from_products(rows))
    }

    /// Build the catalog from already-parsed rows.
    ///
    /// Rows without a `product_id` are dropped since no detail page can be
    /// routed to them, and so are later rows repeating an id already seen.
    /// Other invalid rows are kept and logged.
    #[must_use]
    pub fn from_products(rows: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        let mut products = Vec::with_capacity(rows.len());

        for (row, product) in rows.into_iter().enumerate() {
            match product.validate() {
                Ok(()) => {}
                Err(ValidationError::EmptyProductId) => {
                    tracing::warn!(row, name = %product.nombre, "skipping product without id");
                    continue;
                }
                Err(err) => {
                    tracing::warn!(row, product_id = %product.product_id, error = %err, "suspicious product row");
                }
            }
            if !seen.insert(product.product_id.clone()) {
                tracing::warn!(row, product_id = %product.product_id, "duplicate product id, first row wins");
                continue;
            }
            products.push(product);
        }

        Self {
            products: Arc::new(products),
        }
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for JsonCatalog {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, TiendaError>> + Send {
        let products = self.products.as_ref().clone();
        async move { Ok(products) }
    }

    fn get_by_id(
        &self,
        id: &ProductId,
    ) -> impl Future<Output = Result<Option<Product>, TiendaError>> + Send {
        let found = self
            .products
            .iter()
            .find(|product| &product.product_id == id)
            .cloned();
        async move { Ok(found) }
    }
}
