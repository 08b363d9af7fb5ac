//! Static assets embedded in the binary.

use axum::http::header;
use axum::response::IntoResponse;

/// Path the placeholder image is served from. Must match
/// [`tienda_domain::image::PLACEHOLDER_IMAGE`].
pub const PLACEHOLDER_PATH: &str = tienda_domain::image::PLACEHOLDER_IMAGE;

/// Path of the storefront stylesheet.
pub const STYLESHEET_PATH: &str = "/static/style.css";

const PLACEHOLDER_SVG: &str = include_str!("../assets/placeholder.svg");
const STYLESHEET: &str = include_str!("../assets/style.css");

/// `GET /placeholder.svg`
pub async fn placeholder() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        PLACEHOLDER_SVG,
    )
}

/// `GET /static/style.css`
pub async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLESHEET,
    )
}
