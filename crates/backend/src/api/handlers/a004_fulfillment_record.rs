use axum::{extract::Path, Json};
use contracts::domain::a004_fulfillment_record::aggregate::{
    AdvanceRequest, AdvanceTargetInfo, FulfillmentRecord, FulfillmentRecordDto,
};
use contracts::shared::ApiEnvelope;
use serde_json::json;

use crate::domain::a004_fulfillment_record;

/// GET /api/fulfillment
pub async fn list_all() -> Json<ApiEnvelope<Vec<FulfillmentRecord>>> {
    match a004_fulfillment_record::service::list_all().await {
        Ok(v) => Json(ApiEnvelope::ok(v)),
        Err(e) => {
            tracing::error!("Failed to list fulfillment records: {}", e);
            Json(ApiEnvelope::err(500, "查询履约记录列表失败"))
        }
    }
}

/// GET /api/fulfillment/:id
pub async fn get_by_id(Path(id): Path<String>) -> Json<ApiEnvelope<FulfillmentRecord>> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Json(ApiEnvelope::err(400, "无效的ID")),
    };
    match a004_fulfillment_record::service::get_by_id(uuid).await {
        Ok(Some(v)) => Json(ApiEnvelope::ok(v)),
        Ok(None) => Json(ApiEnvelope::err(404, "履约记录不存在")),
        Err(e) => {
            tracing::error!("Failed to get fulfillment record {}: {}", id, e);
            Json(ApiEnvelope::err(500, "查询履约记录失败"))
        }
    }
}

/// POST /api/fulfillment — статус при вставке всегда начальный,
/// при обновлении статус не трогается
pub async fn upsert(Json(dto): Json<FulfillmentRecordDto>) -> Json<ApiEnvelope<serde_json::Value>> {
    let result = if dto.id.is_some() {
        a004_fulfillment_record::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a004_fulfillment_record::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Json(ApiEnvelope::ok(json!({ "id": id }))),
        Err(e) => Json(ApiEnvelope::err(500, format!("保存履约记录失败: {}", e))),
    }
}

/// DELETE /api/fulfillment/:id
pub async fn delete(Path(id): Path<String>) -> Json<ApiEnvelope<()>> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Json(ApiEnvelope::err(400, "无效的ID")),
    };
    match a004_fulfillment_record::service::delete(uuid).await {
        Ok(true) => Json(ApiEnvelope::ok(())),
        Ok(false) => Json(ApiEnvelope::err(404, "履约记录不存在")),
        Err(e) => {
            tracing::error!("Failed to delete fulfillment record {}: {}", id, e);
            Json(ApiEnvelope::err(500, "删除履约记录失败"))
        }
    }
}

/// GET /api/fulfillment/:id/advance-targets
pub async fn advance_targets(Path(id): Path<String>) -> Json<ApiEnvelope<Vec<AdvanceTargetInfo>>> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Json(ApiEnvelope::err(400, "无效的ID")),
    };
    match a004_fulfillment_record::service::advance_targets(uuid).await {
        Ok(targets) => Json(ApiEnvelope::ok(targets)),
        Err(e) => Json(ApiEnvelope::err(500, format!("查询可流转状态失败: {}", e))),
    }
}

/// POST /api/fulfillment/:id/advance
pub async fn advance(
    Path(id): Path<String>,
    Json(request): Json<AdvanceRequest>,
) -> Json<ApiEnvelope<FulfillmentRecord>> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Json(ApiEnvelope::err(400, "无效的ID")),
    };
    match a004_fulfillment_record::service::advance(uuid, request).await {
        Ok(record) => Json(ApiEnvelope::ok(record)),
        Err(e) => Json(ApiEnvelope::err(422, format!("状态流转失败: {}", e))),
    }
}
