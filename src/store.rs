//! The authoritative in-memory product collection.
//!
//! [`ProductStore`] owns every product and the id counter behind one
//! [`parking_lot::RwLock`]. Mutations take the write lock for their whole
//! duration, so no reader ever sees a half-applied append or removal; reads
//! share the lock with each other.
//!
//! Ids come from a counter that starts at `seed_len + 1` and only moves
//! forward. As long as nothing has been deleted a new id equals the previous
//! collection length plus one; after a delete ids are still never reused.

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::product::{Product, ProductDraft, ProductId};
use crate::query::{ListQuery, ProductPage};
use crate::seed::seed_products;
use crate::stats::ProductStats;

#[derive(Debug)]
struct Inner {
    products: Vec<Product>,
    next_id: ProductId,
}

#[derive(Debug)]
pub struct ProductStore {
    inner: RwLock<Inner>,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore {
    /// An empty store. The first product gets id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// A store holding the four startup products with ids 1 to 4.
    pub fn seeded() -> Self {
        Self::from_drafts(seed_products())
    }

    /// A store populated from `drafts` in order.
    pub fn from_drafts(drafts: impl IntoIterator<Item = ProductDraft>) -> Self {
        let store = Self::new();
        for draft in drafts {
            store.create(draft);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.inner.read().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().products.is_empty()
    }

    /// Snapshot of the whole collection in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.inner.read().products.clone()
    }

    pub fn get(&self, id: ProductId) -> CatalogResult<Product> {
        self.inner
            .read()
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    /// Append a new product built from `draft` and return it.
    pub fn create(&self, draft: ProductDraft) -> Product {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let product = draft.into_product(id);
        inner.products.push(product.clone());
        debug!(id, total = inner.products.len(), "product created");
        product
    }

    /// Overlay `draft` onto the product with `id`.
    pub fn update(&self, id: ProductId, draft: ProductDraft) -> CatalogResult<Product> {
        let mut inner = self.inner.write();
        let product = inner
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound)?;

        product.apply(draft);
        debug!(id, "product updated");
        Ok(product.clone())
    }

    /// Remove the first product with `id`.
    pub fn delete(&self, id: ProductId) -> CatalogResult<()> {
        let mut inner = self.inner.write();
        let index = inner
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound)?;

        inner.products.remove(index);
        debug!(id, total = inner.products.len(), "product deleted");
        Ok(())
    }

    /// Run the query engine against the current collection.
    pub fn query(&self, query: &ListQuery) -> ProductPage {
        query.apply(&self.inner.read().products)
    }

    /// Aggregate counts over the current collection.
    pub fn stats(&self) -> ProductStats {
        ProductStats::collect(&self.inner.read().products)
    }
}
