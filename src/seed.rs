//! Products loaded into a fresh store at startup.

use crate::product::ProductDraft;

pub fn seed_products() -> Vec<ProductDraft> {
    vec![
        ProductDraft::new("Laptop", "Powerful laptop", 45000, "Electronics", true),
        ProductDraft::new("Shoes", "Running shoes", 4500, "Fashion", false),
        ProductDraft::new("Smartphone", "Android phone", 30000, "Electronics", true),
        ProductDraft::new("T-Shirt", "Cotton T-shirt", 1200, "Fashion", true),
    ]
}
