//! Write-body validation.
//!
//! Create and update bodies go through [`validate_product`] before the store
//! is touched. The body is inspected as raw JSON so that presence and type
//! can be told apart:
//!
//! - `name`, `description` and `category` count as missing when absent or
//!   falsy (`null`, `""`, `0`, `false`).
//! - `price` and `inStock` count as missing only when the key is absent;
//!   `null`, `0` and `false` are present values.
//! - `price` must then be a JSON number, the text fields strings and
//!   `inStock` a boolean.

use serde_json::{Map, Value};

use crate::error::{CatalogError, CatalogResult};
use crate::product::ProductDraft;

pub const MSG_REQUIRED: &str = "All fields are required";
pub const MSG_PRICE_NUMBER: &str = "Price must be a number";

/// Check a write body and convert it into a fully populated draft.
pub fn validate_product(body: &Value) -> CatalogResult<ProductDraft> {
    let Some(fields) = body.as_object() else {
        return Err(CatalogError::validation(MSG_REQUIRED));
    };

    let required_present = ["name", "description", "category"]
        .iter()
        .all(|key| fields.get(*key).is_some_and(is_truthy))
        && fields.contains_key("price")
        && fields.contains_key("inStock");
    if !required_present {
        return Err(CatalogError::validation(MSG_REQUIRED));
    }

    let price = match fields.get("price") {
        Some(Value::Number(n)) => n.clone(),
        _ => return Err(CatalogError::validation(MSG_PRICE_NUMBER)),
    };

    let in_stock = fields
        .get("inStock")
        .and_then(Value::as_bool)
        .ok_or_else(|| CatalogError::validation("inStock must be a boolean"))?;

    Ok(ProductDraft {
        name: Some(text_field(fields, "name")?),
        description: Some(text_field(fields, "description")?),
        price: Some(price),
        category: Some(text_field(fields, "category")?),
        in_stock: Some(in_stock),
    })
}

fn text_field(fields: &Map<String, Value>, key: &str) -> CatalogResult<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| CatalogError::validation(format!("{key} must be a string")))
}

/// JavaScript truthiness over JSON values.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
