//! Server-side rendered storefront pages.

pub mod catalog;
pub mod product;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use tienda_app::ports::ProductCatalog;
use tienda_domain::error::TiendaError;

use crate::error::status_and_message;
use crate::state::AppState;

/// Build the storefront sub-router for SSR HTML pages.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: ProductCatalog + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(catalog::index::<C>))
        .route("/producto/{id}", get(product::detail::<C>))
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    title: &'static str,
    message: String,
}

/// Renders a [`TiendaError`] as an HTML error page.
pub struct DashboardError(TiendaError);

impl From<TiendaError> for DashboardError {
    fn from(err: TiendaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        let title = match status {
            StatusCode::NOT_FOUND => "Producto no encontrado",
            StatusCode::BAD_REQUEST => "Solicitud inválida",
            _ => "Error del servidor",
        };
        let page = ErrorTemplate { title, message };
        (status, Html(page.to_string())).into_response()
    }
}
