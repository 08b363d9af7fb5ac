//! Catalog page: the grid of product cards.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use tienda_app::ports::ProductCatalog;
use tienda_domain::card::ProductCardView;

use super::DashboardError;
use crate::state::AppState;

/// Catalog grid template.
#[derive(Template)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    cards: Vec<ProductCardView>,
}

impl IntoResponse for CatalogTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /`: every catalog product as a card.
///
/// # Errors
///
/// Returns an error page when the catalog cannot be read.
pub async fn index<C>(State(state): State<AppState<C>>) -> Result<CatalogTemplate, DashboardError>
where
    C: ProductCatalog + Send + Sync + 'static,
{
    let cards = state.catalog_service.list_cards().await?;
    Ok(CatalogTemplate { cards })
}
