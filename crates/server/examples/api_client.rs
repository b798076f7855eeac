//! Walk through the catalog API against a running server
//!
//! Start the server first (`cargo run -p catalog-server`), then
//! `cargo run -p catalog-server --example api_client`.

use reqwest::Client;
use serde_json::{json, Value};

const SERVER_URL: &str = "http://localhost:4000";
const API_KEY: &str = "12345";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Filtered, paginated listing
    println!("2. List Electronics (page 1, 2 per page):");
    let resp = client
        .get(format!("{SERVER_URL}/api/products"))
        .query(&[("category", "electronics"), ("page", "1"), ("limit", "2")])
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 3: Create a product
    println!("3. Create Product:");
    let resp = client
        .post(format!("{SERVER_URL}/api/products"))
        .header("x-api-key", API_KEY)
        .json(&json!({
            "name": "Headphones",
            "description": "Noise cancelling headphones",
            "price": 8500,
            "category": "Electronics",
            "inStock": true
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    let created: Value = resp.json().await?;
    println!("Body: {created}");
    println!();

    let id = created["id"].as_u64().unwrap_or_default();

    // Example 4: Update it
    println!("4. Update Product {id}:");
    let resp = client
        .put(format!("{SERVER_URL}/api/products/{id}"))
        .header("x-api-key", API_KEY)
        .json(&json!({
            "name": "Headphones Pro",
            "description": "Noise cancelling headphones",
            "price": 9900,
            "category": "Electronics",
            "inStock": false
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 5: Missing key is rejected
    println!("5. Create Without API Key:");
    let resp = client
        .post(format!("{SERVER_URL}/api/products"))
        .json(&json!({ "name": "Ghost" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 6: Stats
    println!("6. Stats:");
    let resp = client
        .get(format!("{SERVER_URL}/api/products/stats"))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 7: Delete it
    println!("7. Delete Product {id}:");
    let resp = client
        .delete(format!("{SERVER_URL}/api/products/{id}"))
        .header("x-api-key", API_KEY)
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("All examples completed!");
    Ok(())
}
