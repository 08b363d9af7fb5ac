//! Catalog-file error type.

use tienda_domain::error::TiendaError;

/// Errors raised while loading the catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogFileError {
    /// The file could not be read.
    #[error("failed to read catalog file")]
    Io(#[from] std::io::Error),

    /// The file is not a JSON array of products.
    #[error("malformed catalog JSON")]
    Json(#[from] serde_json::Error),
}

impl From<CatalogFileError> for TiendaError {
    fn from(err: CatalogFileError) -> Self {
        Self::Catalog(Box::new(err))
    }
}
