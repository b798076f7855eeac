//! Server-rendered views.
//!
//! `GET /products` renders the current collection as a table plus an
//! add-product form. The form's script talks to the JSON API like any other
//! client, so this module only reads from the store.

use crate::state::ServerState;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use catalog::Product;
use serde_json::Number;
use std::fmt::Write;
use std::sync::Arc;

/// Plain-text greeting at `/`
pub async fn root() -> &'static str {
    "Hello World 🌍"
}

/// HTML product table with an add-product form
pub async fn products_page(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Html(render_products_page(&state.store.list(), &state.config.api_key))
}

pub fn render_products_page(products: &[Product], api_key: &str) -> String {
    let mut rows = String::new();
    for product in products {
        let _ = write!(
            rows,
            "\n          <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            product.id,
            escape_html(&product.name),
            escape_html(&product.description),
            format_price(&product.price),
            escape_html(&product.category),
            if product.in_stock { "✅ Yes" } else { "❌ No" },
        );
    }

    PAGE_TEMPLATE
        .replace("{{api_key}}", &script_string(api_key))
        .replace("{{rows}}", &rows)
}

/// Escape text for an HTML text node or quoted attribute.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a price with comma thousands separators and at most three
/// fraction digits (`45000` → `45,000`, `1234.5` → `1,234.5`).
pub fn format_price(price: &Number) -> String {
    if let Some(n) = price.as_i64() {
        let grouped = group_thousands(&n.unsigned_abs().to_string());
        return if n < 0 { format!("-{grouped}") } else { grouped };
    }
    if let Some(n) = price.as_u64() {
        return group_thousands(&n.to_string());
    }

    let value = price.as_f64().unwrap_or_default();
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// JSON-encode `raw` for inlining in a `<script>` block.
fn script_string(raw: &str) -> String {
    serde_json::to_string(raw)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c")
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>Products List</title>
    <style>
      body { font-family: Arial, sans-serif; margin: 20px; }
      table { width: 80%; border-collapse: collapse; margin: auto; margin-bottom: 30px; }
      th, td { border: 1px solid #ccc; padding: 10px; text-align: center; }
      th { background: #f4f4f4; }
      h1, h2 { text-align: center; }
      form { width: 50%; margin: auto; display: flex; flex-direction: column; gap: 10px; }
      input, select { padding: 8px; font-size: 1rem; }
      button { padding: 10px; font-size: 1rem; cursor: pointer; }
    </style>
  </head>
  <body>
    <h1>Available Products</h1>
    <table id="products-table">
      <tr>
        <th>ID</th>
        <th>Name</th>
        <th>Description</th>
        <th>Price (Ksh)</th>
        <th>Category</th>
        <th>In Stock</th>
      </tr>{{rows}}
    </table>

    <h2>Add New Product</h2>
    <form id="add-product-form">
      <input type="text" name="name" placeholder="Name" required />
      <input type="text" name="description" placeholder="Description" required />
      <input type="number" name="price" placeholder="Price" step="any" required />
      <input type="text" name="category" placeholder="Category" required />
      <select name="inStock" required>
        <option value="">In Stock?</option>
        <option value="true">Yes</option>
        <option value="false">No</option>
      </select>
      <button type="submit">Add Product</button>
    </form>

    <script>
      const API_KEY = {{api_key}};
      const form = document.getElementById('add-product-form');
      form.addEventListener('submit', async (e) => {
        e.preventDefault();
        const formData = new FormData(form);
        const data = {
          name: formData.get('name'),
          description: formData.get('description'),
          price: parseFloat(formData.get('price')),
          category: formData.get('category'),
          inStock: formData.get('inStock') === 'true'
        };

        try {
          const response = await fetch('/api/products', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json', 'x-api-key': API_KEY },
            body: JSON.stringify(data)
          });
          if (!response.ok) {
            const body = await response.json().catch(() => ({}));
            throw new Error(body.message || 'Failed to add product');
          }

          const p = await response.json();
          const row = document.getElementById('products-table').insertRow(-1);
          [p.id, p.name, p.description, p.price.toLocaleString(), p.category,
           p.inStock ? '✅ Yes' : '❌ No'].forEach((value) => {
            row.insertCell(-1).textContent = value;
          });
          form.reset();
        } catch (err) {
          alert(err.message);
        }
      });
    </script>
  </body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::ProductStore;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(&Number::from(45000)), "45,000");
        assert_eq!(format_price(&Number::from(1200)), "1,200");
        assert_eq!(format_price(&Number::from(999)), "999");
        assert_eq!(format_price(&Number::from(-1234567)), "-1,234,567");
        assert_eq!(format_price(&Number::from_f64(1234.5).unwrap()), "1,234.5");
        assert_eq!(format_price(&Number::from_f64(19.999).unwrap()), "19.999");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_page_lists_every_product() {
        let store = ProductStore::seeded();
        let html = render_products_page(&store.list(), "12345");

        assert!(html.contains("<td>Laptop</td>"));
        assert!(html.contains("<td>45,000</td>"));
        assert!(html.contains("❌ No"));
        assert!(html.contains(r#"const API_KEY = "12345";"#));
        assert_eq!(html.matches("<tr><td>").count(), 4);
    }

    #[test]
    fn test_script_string_cannot_close_script_tag() {
        assert_eq!(script_string("</script>"), r#""\u003c/script>""#);
    }
}
