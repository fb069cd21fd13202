use contracts::domain::a005_tag::aggregate::{Tag, TagDto};

use crate::shared::http;

pub async fn list_all() -> Result<Vec<Tag>, String> {
    http::get_json("/api/tag").await
}

pub async fn save(dto: &TagDto) -> Result<(), String> {
    http::post_json::<_, serde_json::Value>("/api/tag", dto)
        .await
        .map(|_| ())
}

pub async fn delete(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/tag/{}", id)).await
}
