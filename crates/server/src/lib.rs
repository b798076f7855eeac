//! Catalog Server - HTTP REST API for the product catalog
//!
//! This crate exposes the `catalog` core over HTTP:
//!
//! - **Products**: list with filters and pagination, fetch, create, update,
//!   delete and aggregate statistics
//! - **Pages**: a server-rendered product table with an add-product form
//! - **Health**: liveness probe
//!
//! # Features
//!
//! - **Write gate**: a static shared secret in the `x-api-key` header guards
//!   create/update/delete. This is a placeholder, not real authentication.
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: Uniform `{ "error", "message" }` bodies
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! ## Public Endpoints
//!
//! - `GET /` - Greeting
//! - `GET /health` - Liveness probe
//! - `GET /products` - HTML product table
//! - `GET /api/products` - List (`category`, `search`, `page`, `limit`)
//! - `GET /api/products/stats` - Aggregate counts
//! - `GET /api/products/{id}` - Get product by ID
//!
//! ## Protected Endpoints (`x-api-key` Required)
//!
//! - `POST /api/products` - Create product
//! - `PUT /api/products/{id}` - Update product
//! - `DELETE /api/products/{id}` - Delete product

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
