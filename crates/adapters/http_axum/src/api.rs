//! JSON REST handlers for the catalog.

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;

use tienda_app::ports::ProductCatalog;
use tienda_domain::id::ProductId;
use tienda_domain::product::Product;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: ProductCatalog + Send + Sync + 'static,
{
    Router::new()
        .route("/products", get(list_products::<C>))
        .route("/products/{id}", get(get_product::<C>))
}

/// `GET /api/products`
///
/// # Errors
///
/// Returns a 500 response when the catalog cannot be read.
pub async fn list_products<C>(
    State(state): State<AppState<C>>,
) -> Result<Json<Vec<Product>>, ApiError>
where
    C: ProductCatalog + Send + Sync + 'static,
{
    let products = state.catalog_service.list_products().await?;
    Ok(Json(products))
}

/// `GET /api/products/{id}`
///
/// # Errors
///
/// Returns a 404 response for an unknown id, 500 when the catalog cannot be
/// read.
pub async fn get_product<C>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError>
where
    C: ProductCatalog + Send + Sync + 'static,
{
    let product = state
        .catalog_service
        .get_product(&ProductId::new(id))
        .await?;
    Ok(Json(product))
}
