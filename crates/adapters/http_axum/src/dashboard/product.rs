//! Product detail page: the target of every card link.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};

use tienda_app::ports::ProductCatalog;
use tienda_domain::card::ProductCardView;
use tienda_domain::id::ProductId;
use tienda_domain::image::main_image_source;
use tienda_domain::product::Product;

use super::DashboardError;
use crate::state::AppState;

/// Product detail template.
#[derive(Template)]
#[template(path = "product_detail.html")]
pub struct ProductDetailTemplate {
    image_src: String,
    card: ProductCardView,
    product: Product,
}

impl ProductDetailTemplate {
    fn new(product: Product) -> Self {
        Self {
            image_src: main_image_source(&product).to_string(),
            card: ProductCardView::new(&product, 0),
            product,
        }
    }
}

impl IntoResponse for ProductDetailTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /producto/{id}`: one product in full.
///
/// # Errors
///
/// Returns a 404 page for an unknown id, or an error page when the catalog
/// cannot be read.
pub async fn detail<C>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<ProductDetailTemplate, DashboardError>
where
    C: ProductCatalog + Send + Sync + 'static,
{
    let product = state
        .catalog_service
        .get_product(&ProductId::new(id))
        .await?;
    Ok(ProductDetailTemplate::new(product))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_product_details() {
        let product = Product::builder()
            .id("RAD-05")
            .name("Radiador")
            .category("Refrigeración")
            .brand("Valeo")
            .compatible_with("Yaris", 2006, 2013)
            .price(129_990)
            .stock(1, 2)
            .unit("unidad")
            .build();

        let html = ProductDetailTemplate::new(product).to_string();

        assert!(html.contains("Radiador"));
        assert!(html.contains("Valeo"));
        assert!(html.contains("Compatible con Yaris (2006-2013)"));
        assert!(html.contains("$129.990"));
        assert!(html.contains("badge-stock-low"));
        assert!(html.contains("Stock bajo"));
        assert!(!html.contains("IVA incl."));
    }
}
