use contracts::domain::a002_product::aggregate::{Product, ProductDto};

use crate::shared::http;

pub async fn list_all() -> Result<Vec<Product>, String> {
    http::get_json("/api/product").await
}

pub async fn get_by_id(id: &str) -> Result<Product, String> {
    http::get_json(&format!("/api/product/{}", id)).await
}

pub async fn save(dto: &ProductDto) -> Result<(), String> {
    http::post_json::<_, serde_json::Value>("/api/product", dto)
        .await
        .map(|_| ())
}

pub async fn delete(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/product/{}", id)).await
}

pub async fn insert_test_data() -> Result<(), String> {
    http::post_empty("/api/product/testdata").await
}
