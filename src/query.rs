//! List filtering and pagination.
//!
//! A [`ListQuery`] carries the raw query-string values of a list request.
//! [`ListQuery::apply`] filters by category (case-insensitive, exact), then
//! by name search (case-insensitive, substring), counts the survivors and
//! cuts the `[(page - 1) * limit, page * limit)` window out of them. A window
//! past the end is an empty page, not an error.

use serde::{Deserialize, Serialize};

use crate::product::Product;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 5;

/// Raw list parameters. `page` and `limit` stay strings so that garbage
/// input degrades to the defaults instead of failing the request.
///
/// Deserializes from the raw key/value pairs of a query string. When a key
/// repeats, its first value is used; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl From<Vec<(String, String)>> for ListQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut query.category,
                "search" => &mut query.search,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Number of products that matched the filters, across all pages.
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub products: Vec<Product>,
}

impl ListQuery {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: usize, limit: usize) -> Self {
        self.page = Some(page.to_string());
        self.limit = Some(limit.to_string());
        self
    }

    /// Effective page number.
    pub fn page(&self) -> usize {
        self.page.as_deref().and_then(parse_positive).unwrap_or(DEFAULT_PAGE)
    }

    /// Effective page size.
    pub fn limit(&self) -> usize {
        self.limit.as_deref().and_then(parse_positive).unwrap_or(DEFAULT_LIMIT)
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = non_empty(&self.category) {
            if product.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }
        if let Some(search) = non_empty(&self.search) {
            if !product.name.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, products: &[Product]) -> ProductPage {
        let filtered: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();

        let page = self.page();
        let limit = self.limit();
        let end = page.saturating_mul(limit).min(filtered.len());
        let start = (page - 1).saturating_mul(limit).min(end);

        ProductPage {
            total: filtered.len(),
            page,
            limit,
            products: filtered[start..end].iter().map(|p| (*p).clone()).collect(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Lenient integer reading: leading whitespace and a `+` sign are skipped and
/// the longest run of leading digits is used (`"2abc"` reads as 2). Zero,
/// negatives and values without leading digits yield `None`.
fn parse_positive(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_end]
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_products;

    fn catalog() -> Vec<Product> {
        seed_products()
            .into_iter()
            .zip(1..)
            .map(|(draft, id)| draft.into_product(id))
            .collect()
    }

    fn names(page: &ProductPage) -> Vec<&str> {
        page.products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn defaults_return_first_five() {
        let page = ListQuery::default().apply(&catalog());
        assert_eq!(page.total, 4);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 5);
        assert_eq!(names(&page), ["Laptop", "Shoes", "Smartphone", "T-Shirt"]);
    }

    #[test]
    fn second_page_of_two() {
        let page = ListQuery::default().with_page(2, 2).apply(&catalog());
        assert_eq!(page.total, 4);
        assert_eq!(names(&page), ["Smartphone", "T-Shirt"]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = ListQuery::default().with_page(9, 3).apply(&catalog());
        assert_eq!(page.total, 4);
        assert!(page.products.is_empty());
    }

    #[test]
    fn category_is_case_insensitive_exact() {
        let page = ListQuery::default().with_category("electronics").apply(&catalog());
        assert_eq!(page.total, 2);
        assert_eq!(names(&page), ["Laptop", "Smartphone"]);

        let partial = ListQuery::default().with_category("Electro").apply(&catalog());
        assert_eq!(partial.total, 0);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let page = ListQuery::default().with_search("PHO").apply(&catalog());
        assert_eq!(names(&page), ["Smartphone"]);
    }

    #[test]
    fn filters_combine_before_counting() {
        let page = ListQuery::default()
            .with_category("fashion")
            .with_search("s")
            .with_page(1, 1)
            .apply(&catalog());
        assert_eq!(page.total, 2);
        assert_eq!(names(&page), ["Shoes"]);
    }

    #[test]
    fn empty_filters_are_ignored() {
        let page = ListQuery::default().with_category("").with_search("").apply(&catalog());
        assert_eq!(page.total, 4);
    }

    #[test]
    fn bad_pagination_values_fall_back() {
        let query = ListQuery {
            page: Some("abc".into()),
            limit: Some("0".into()),
            ..Default::default()
        };
        assert_eq!(query.page(), DEFAULT_PAGE);
        assert_eq!(query.limit(), DEFAULT_LIMIT);

        let query = ListQuery {
            page: Some("-3".into()),
            limit: Some("2abc".into()),
            ..Default::default()
        };
        assert_eq!(query.page(), DEFAULT_PAGE);
        assert_eq!(query.limit(), 2);
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn repeated_keys_keep_first_value() {
        let query = ListQuery::from(pairs(&[
            ("page", "1"),
            ("category", "fashion"),
            ("page", "2"),
            ("category", "electronics"),
            ("sort", "price"),
        ]));
        assert_eq!(query.page(), 1);
        assert_eq!(query.category.as_deref(), Some("fashion"));
        assert_eq!(query.limit, None);
    }

    #[test]
    fn deserializes_from_pairs() {
        let query: ListQuery =
            serde_json::from_str(r#"[["limit","2"],["limit","9"],["search","pho"]]"#).unwrap();
        assert_eq!(
            query,
            ListQuery {
                search: Some("pho".into()),
                limit: Some("2".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn empty_collection() {
        let page = ListQuery::default().apply(&[]);
        assert_eq!(page.total, 0);
        assert!(page.products.is_empty());
    }
}
