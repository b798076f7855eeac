//! Domain failures produced by the catalog core.
//!
//! Every fallible catalog operation returns [`CatalogResult`]. The HTTP layer
//! maps each variant onto a status code and a `{ error, message }` body; this
//! crate only decides *what* went wrong.
//!
//! | Error | Kind name | HTTP status |
//! |-------|-----------|-------------|
//! | [`NotFound`](CatalogError::NotFound) | `NotFoundError` | 404 |
//! | [`Validation`](CatalogError::Validation) | `ValidationError` | 400 |

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure kinds raised by the store and the validation gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No product carries the requested id.
    #[error("Product not found")]
    NotFound,

    /// A write body failed a required-field or type check.
    #[error("{0}")]
    Validation(String),
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation(message.into())
    }

    /// Stable kind name used in error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::NotFound => "NotFoundError",
            CatalogError::Validation(_) => "ValidationError",
        }
    }
}
