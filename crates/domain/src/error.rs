//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`TiendaError`]
//! via `#[from]`.

/// Top-level error shared by the application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum TiendaError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The product catalog could not be read.
    #[error("catalog error")]
    Catalog(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A product record breaks one of the catalog invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("product id must not be empty")]
    EmptyProductId,

    #[error("stock quantities must not be negative")]
    NegativeStock,

    #[error("compatible year range starts after it ends")]
    InvertedYearRange,
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
