//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tienda_domain::error::TiendaError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`TiendaError`] to an HTTP status code and a client-safe message.
///
/// Catalog failures are logged and reported as a generic internal error.
pub(crate) fn status_and_message(err: &TiendaError) -> (StatusCode, String) {
    match err {
        TiendaError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        TiendaError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        TiendaError::Catalog(err) => {
            tracing::error!(error = %err, "catalog error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

/// Maps [`TiendaError`] to a JSON HTTP response.
pub struct ApiError(TiendaError);

impl From<TiendaError> for ApiError {
    fn from(err: TiendaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
