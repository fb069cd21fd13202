use contracts::domain::a001_influencer::aggregate::{Influencer, InfluencerDto};

use crate::shared::http;

pub async fn list_all() -> Result<Vec<Influencer>, String> {
    http::get_json("/api/influencer").await
}

pub async fn get_by_id(id: &str) -> Result<Influencer, String> {
    http::get_json(&format!("/api/influencer/{}", id)).await
}

pub async fn save(dto: &InfluencerDto) -> Result<(), String> {
    http::post_json::<_, serde_json::Value>("/api/influencer", dto)
        .await
        .map(|_| ())
}

pub async fn delete(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/influencer/{}", id)).await
}

pub async fn insert_test_data() -> Result<(), String> {
    http::post_empty("/api/influencer/testdata").await
}
