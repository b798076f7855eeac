//! Error translation for the HTTP layer.
//!
//! Every failing handler or middleware returns a [`ServerError`]; its
//! [`IntoResponse`] impl is the one place an error response is written. The
//! body is always `{ "error": <kind>, "message": <text> }` and the failure is
//! logged before the response leaves.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog::CatalogError;
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Unauthorized: Invalid API key")]
    Unauthorized,

    #[error("Route not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Request timeout")]
    Timeout,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Catalog(CatalogError::NotFound) | ServerError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            ServerError::Catalog(CatalogError::Validation(_)) => StatusCode::BAD_REQUEST,
            ServerError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Kind name reported in the `error` field
    pub fn kind(&self) -> &'static str {
        match self {
            ServerError::Catalog(err) => err.kind(),
            ServerError::Unauthorized => "Unauthorized",
            ServerError::RouteNotFound => "NotFoundError",
            ServerError::MethodNotAllowed => "MethodNotAllowedError",
            ServerError::PayloadTooLarge => "PayloadTooLargeError",
            ServerError::Timeout => "RequestTimeoutError",
            ServerError::Internal(_) | ServerError::Config(_) => "InternalServerError",
        }
    }

    /// Message shown to the client. Internal details stay in the logs.
    fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "Something went wrong".to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let kind = self.kind();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), kind, error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), kind, error = %self, "request rejected");
        }

        let body = Json(ErrorResponse {
            error: kind.to_string(),
            message: self.public_message(),
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ServerError::PayloadTooLarge;
        }
        ServerError::Catalog(CatalogError::validation(rejection.body_text()))
    }
}

/// An id segment that cannot even be decoded names no product.
impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "unusable path parameter");
        ServerError::Catalog(CatalogError::NotFound)
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_kind_per_variant() {
        let cases = [
            (ServerError::from(CatalogError::NotFound), 404, "NotFoundError"),
            (
                ServerError::from(CatalogError::validation("Price must be a number")),
                400,
                "ValidationError",
            ),
            (ServerError::Unauthorized, 401, "Unauthorized"),
            (ServerError::RouteNotFound, 404, "NotFoundError"),
            (ServerError::MethodNotAllowed, 405, "MethodNotAllowedError"),
            (ServerError::PayloadTooLarge, 413, "PayloadTooLargeError"),
            (ServerError::Timeout, 408, "RequestTimeoutError"),
            (ServerError::Internal("boom".into()), 500, "InternalServerError"),
        ];

        for (err, status, kind) in cases {
            assert_eq!(err.status_code().as_u16(), status);
            assert_eq!(err.kind(), kind);
        }
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let err = ServerError::Internal("lock poisoned at store.rs:42".into());
        assert_eq!(err.public_message(), "Something went wrong");

        let err = ServerError::from(CatalogError::NotFound);
        assert_eq!(err.public_message(), "Product not found");
    }
}
