//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use tienda_app::ports::ProductCatalog;

use crate::assets;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api`, storefront pages at `/` and the static
/// assets. Includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level using the `tracing` ecosystem.
pub fn build<C>(state: AppState<C>) -> Router
where
    C: ProductCatalog + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route(assets::PLACEHOLDER_PATH, get(assets::placeholder))
        .route(assets::STYLESHEET_PATH, get(assets::stylesheet))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
