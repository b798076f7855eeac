//! Summary counts over the collection.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::product::Product;

/// Per-category product counts, in the order categories were first seen.
///
/// Serializes as a JSON object (`{"Electronics": 2, "Fashion": 2}`) and
/// reads back in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts(Vec<(String, usize)>);

impl CategoryCounts {
    fn increment(&mut self, category: &str) {
        match self.0.iter_mut().find(|(name, _)| name == category) {
            Some((_, count)) => *count += 1,
            None => self.0.push((category.to_owned(), 1)),
        }
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, count) in &self.0 {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = CategoryCounts;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category names to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut counts = CategoryCounts(Vec::with_capacity(access.size_hint().unwrap_or(0)));
                while let Some((name, count)) = access.next_entry::<String, usize>()? {
                    match counts.0.iter_mut().find(|(seen, _)| *seen == name) {
                        Some((_, total)) => *total += count,
                        None => counts.0.push((name, count)),
                    }
                }
                Ok(counts)
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: usize,
    pub categories: CategoryCounts,
    pub in_stock: usize,
}

impl ProductStats {
    /// Single pass over `products`.
    pub fn collect(products: &[Product]) -> Self {
        products.iter().fold(Self::default(), |mut stats, product| {
            stats.total_products += 1;
            stats.categories.increment(&product.category);
            if product.in_stock {
                stats.in_stock += 1;
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductDraft;
    use crate::seed::seed_products;
    use serde_json::json;

    #[test]
    fn seed_stats() {
        let products: Vec<_> = seed_products()
            .into_iter()
            .zip(1..)
            .map(|(draft, id)| draft.into_product(id))
            .collect();
        let stats = ProductStats::collect(&products);

        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({
                "totalProducts": 4,
                "categories": { "Electronics": 2, "Fashion": 2 },
                "inStock": 3
            })
        );
    }

    #[test]
    fn empty_collection_has_zero_counts() {
        let stats = ProductStats::collect(&[]);
        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({ "totalProducts": 0, "categories": {}, "inStock": 0 })
        );
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let products: Vec<_> = ["Toys", "Books", "Toys", "Apparel"]
            .into_iter()
            .zip(1..)
            .map(|(category, id)| ProductDraft::new("x", "y", 1, category, false).into_product(id))
            .collect();
        let stats = ProductStats::collect(&products);

        let order: Vec<_> = stats.categories.iter().collect();
        assert_eq!(order, [("Toys", 2), ("Books", 1), ("Apparel", 1)]);
        assert_eq!(
            serde_json::to_string(&stats.categories).unwrap(),
            r#"{"Toys":2,"Books":1,"Apparel":1}"#
        );
        assert_eq!(stats.in_stock, 0);
    }

    #[test]
    fn counts_read_back_in_document_order() {
        let raw = r#"{"totalProducts":4,"categories":{"Toys":3,"Books":1},"inStock":2}"#;
        let stats: ProductStats = serde_json::from_str(raw).unwrap();

        let order: Vec<_> = stats.categories.iter().collect();
        assert_eq!(order, [("Toys", 3), ("Books", 1)]);
        assert_eq!(serde_json::to_string(&stats).unwrap(), raw);
    }
}
