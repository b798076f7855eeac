//! API route handlers
//!
//! - `products`: the `/api/products` collection (list, get, stats, create,
//!   update, delete)
//! - `pages`: server-rendered HTML and the root greeting
//! - `health`: liveness probe

pub mod health;
pub mod pages;
pub mod products;

use crate::error::ServerError;

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::RouteNotFound
}

/// 405 handler for a known path hit with a method it does not serve
pub async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}
