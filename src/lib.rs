//! In-memory product catalog.
//!
//! This crate holds the domain side of the catalog service: the product
//! model, the [`ProductStore`] that owns the collection, the list query
//! engine, summary statistics and the write-body validation gate. It has no
//! HTTP types; the `catalog-server` crate under `crates/server` exposes it
//! over REST.
//!
//! ```rust
//! use catalog::{validate_product, ListQuery, ProductStore};
//! use serde_json::json;
//!
//! let store = ProductStore::seeded();
//!
//! let body = json!({
//!     "name": "Headphones",
//!     "description": "Noise cancelling",
//!     "price": 8500,
//!     "category": "Electronics",
//!     "inStock": true
//! });
//! let created = store.create(validate_product(&body)?);
//! assert_eq!(created.id, 5);
//!
//! let page = store.query(&ListQuery::default().with_category("electronics"));
//! assert_eq!(page.total, 3);
//! # Ok::<(), catalog::CatalogError>(())
//! ```

pub mod error;
pub mod product;
pub mod query;
pub mod seed;
pub mod stats;
pub mod store;
pub mod validate;

pub use error::{CatalogError, CatalogResult};
pub use product::{Product, ProductDraft, ProductId};
pub use query::{DEFAULT_LIMIT, DEFAULT_PAGE, ListQuery, ProductPage};
pub use seed::seed_products;
pub use stats::{CategoryCounts, ProductStats};
pub use store::ProductStore;
pub use validate::validate_product;
