//! Catalog service: use-cases for browsing the storefront catalog.

use tienda_domain::card::{ProductCardView, cards_for};
use tienda_domain::error::{NotFoundError, TiendaError, ValidationError};
use tienda_domain::id::ProductId;
use tienda_domain::product::Product;

use crate::ports::ProductCatalog;

/// Application service for reading the catalog.
pub struct CatalogService<C> {
    catalog: C,
}

impl<C: ProductCatalog> CatalogService<C> {
    /// Create a new service backed by the given catalog.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns a catalog error propagated from the port.
    pub async fn list_products(&self) -> Result<Vec<Product>, TiendaError> {
        self.catalog.get_all().await
    }

    /// Look up a product by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TiendaError::Validation`] when `id` is blank,
    /// [`TiendaError::NotFound`] when no product with `id` exists,
    /// or a catalog error from the port.
    #[tracing::instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, TiendaError> {
        if id.is_blank() {
            return Err(ValidationError::EmptyProductId.into());
        }
        self.catalog.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Product",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Product cards for the whole catalog, staggered by position.
    ///
    /// # Errors
    ///
    /// Returns a catalog error propagated from the port.
    #[tracing::instrument(skip(self))]
    pub async fn list_cards(&self) -> Result<Vec<ProductCardView>, TiendaError> {
        let products = self.catalog.get_all().await?;
        tracing::debug!(count = products.len(), "building product cards");
        Ok(cards_for(&products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    struct InMemoryCatalog {
        products: Vec<Product>,
    }

    impl ProductCatalog for InMemoryCatalog {
        fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, TiendaError>> + Send {
            let products = self.products.clone();
            async move { Ok(products) }
        }

        fn get_by_id(
            &self,
            id: &ProductId,
        ) -> impl Future<Output = Result<Option<Product>, TiendaError>> + Send {
            let found = self.products.iter().find(|p| &p.product_id == id).cloned();
            async move { Ok(found) }
        }
    }

    struct BrokenCatalog;

    impl ProductCatalog for BrokenCatalog {
        fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, TiendaError>> + Send {
            async { Err(TiendaError::Catalog("sheet unreachable".into())) }
        }

        fn get_by_id(
            &self,
            _id: &ProductId,
        ) -> impl Future<Output = Result<Option<Product>, TiendaError>> + Send {
            async { Err(TiendaError::Catalog("sheet unreachable".into())) }
        }
    }

    fn service() -> CatalogService<InMemoryCatalog> {
        CatalogService::new(InMemoryCatalog {
            products: vec![
                Product::builder().id("P-1").name("Bujía").build(),
                Product::builder().id("P-2").name("Correa").build(),
            ],
        })
    }

    #[tokio::test]
    async fn should_list_products_in_catalog_order() {
        let products = service().list_products().await.unwrap();
        let names: Vec<_> = products.iter().map(|p| p.nombre.as_str()).collect();
        assert_eq!(names, ["Bujía", "Correa"]);
    }

    #[tokio::test]
    async fn should_return_product_when_id_exists() {
        let product = service().get_product(&ProductId::new("P-2")).await.unwrap();
        assert_eq!(product.nombre, "Correa");
    }

    #[tokio::test]
    async fn should_return_not_found_when_id_unknown() {
        let result = service().get_product(&ProductId::new("nope")).await;
        assert!(matches!(result, Err(TiendaError::NotFound(err)) if err.id == "nope"));
    }

    #[tokio::test]
    async fn should_reject_blank_id_before_lookup() {
        let service = CatalogService::new(BrokenCatalog);
        let result = service.get_product(&ProductId::new("  ")).await;
        assert!(matches!(
            result,
            Err(TiendaError::Validation(ValidationError::EmptyProductId))
        ));
    }

    #[tokio::test]
    async fn should_build_staggered_cards() {
        let cards = service().list_cards().await.unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].href, "/producto/P-1");
        assert_eq!(cards[1].animation_delay_ms, 50);
    }

    #[tokio::test]
    async fn should_propagate_catalog_errors() {
        let service = CatalogService::new(BrokenCatalog);
        assert!(matches!(
            service.list_cards().await,
            Err(TiendaError::Catalog(_))
        ));
        assert!(matches!(
            service.get_product(&ProductId::new("P-1")).await,
            Err(TiendaError::Catalog(_))
        ));
    }
}
