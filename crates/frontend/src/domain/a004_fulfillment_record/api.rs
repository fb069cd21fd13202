use contracts::domain::a004_fulfillment_record::aggregate::{
    AdvanceRequest, AdvanceTargetInfo, FulfillmentRecord, FulfillmentRecordDto,
};

use crate::shared::http;

pub async fn list_all() -> Result<Vec<FulfillmentRecord>, String> {
    http::get_json("/api/fulfillment").await
}

pub async fn get_by_id(id: &str) -> Result<FulfillmentRecord, String> {
    http::get_json(&format!("/api/fulfillment/{}", id)).await
}

pub async fn save(dto: &FulfillmentRecordDto) -> Result<(), String> {
    http::post_json::<_, serde_json::Value>("/api/fulfillment", dto)
        .await
        .map(|_| ())
}

pub async fn delete(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/fulfillment/{}", id)).await
}

/// Доступные цели перевода для текущего этапа записи
pub async fn advance_targets(id: &str) -> Result<Vec<AdvanceTargetInfo>, String> {
    http::get_json(&format!("/api/fulfillment/{}/advance-targets", id)).await
}

/// Перевести запись на целевой этап
pub async fn advance(id: &str, request: &AdvanceRequest) -> Result<FulfillmentRecord, String> {
    http::post_json(&format!("/api/fulfillment/{}/advance", id), request).await
}
