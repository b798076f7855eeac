//! Product entity and the write-side field set.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Store-assigned product identifier.
pub type ProductId = u64;

/// A catalog entry as held by the store and returned by the API.
///
/// `price` is kept as a [`serde_json::Number`] so the value is echoed back in
/// the same representation it was submitted with (`45000` stays an integer,
/// `19.99` stays a float).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Overlay every field present in `draft`; absent fields keep their
    /// current value. The id never changes.
    pub fn apply(&mut self, draft: ProductDraft) {
        if let Some(name) = draft.name {
            self.name = name;
        }
        if let Some(description) = draft.description {
            self.description = description;
        }
        if let Some(price) = draft.price {
            self.price = price;
        }
        if let Some(category) = draft.category {
            self.category = category;
        }
        if let Some(in_stock) = draft.in_stock {
            self.in_stock = in_stock;
        }
    }

    /// Price as a float, for display purposes.
    pub fn price_f64(&self) -> f64 {
        self.price.as_f64().unwrap_or_default()
    }
}

/// Product fields minus the id, as accepted by create and update.
///
/// Produced by [`crate::validate::validate_product`]; on create every field
/// is `Some`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl ProductDraft {
    /// A draft with every field set.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<Number>,
        category: impl Into<String>,
        in_stock: bool,
    ) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            price: Some(price.into()),
            category: Some(category.into()),
            in_stock: Some(in_stock),
        }
    }

    /// Build a product from this draft. Missing text fields become empty
    /// strings and a missing price becomes zero.
    pub(crate) fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price.unwrap_or_else(|| Number::from(0)),
            category: self.category.unwrap_or_default(),
            in_stock: self.in_stock.unwrap_or_default(),
        }
    }
}
