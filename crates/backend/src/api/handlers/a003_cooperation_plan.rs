use axum::{extract::Path, Json};
use contracts::domain::a003_cooperation_plan::aggregate::{CooperationPlan, CooperationPlanDto};
use contracts::shared::ApiEnvelope;
use serde_json::json;

use crate::domain::a003_cooperation_plan;

/// GET /api/cooperation_plan
pub async fn list_all() -> Json<ApiEnvelope<Vec<CooperationPlan>>> {
    match a003_cooperation_plan::service::list_all().await {
        Ok(v) => Json(ApiEnvelope::ok(v)),
        Err(e) => {
            tracing::error!("Failed to list cooperation plans: {}", e);
            Json(ApiEnvelope::err(500, "查询合作方案列表失败"))
        }
    }
}

/// GET /api/cooperation_plan/:id
pub async fn get_by_id(Path(id): Path<String>) -> Json<ApiEnvelope<CooperationPlan>> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Json(ApiEnvelope::err(400, "无效的ID")),
    };
    match a003_cooperation_plan::service::get_by_id(uuid).await {
        Ok(Some(v)) => Json(ApiEnvelope::ok(v)),
        Ok(None) => Json(ApiEnvelope::err(404, "合作方案不存在")),
        Err(e) => {
            tracing::error!("Failed to get cooperation plan {}: {}", id, e);
            Json(ApiEnvelope::err(500, "查询合作方案失败"))
        }
    }
}

/// POST /api/cooperation_plan
pub async fn upsert(Json(dto): Json<CooperationPlanDto>) -> Json<ApiEnvelope<serde_json::Value>> {
    let result = if dto.id.is_some() {
        a003_cooperation_plan::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a003_cooperation_plan::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Json(ApiEnvelope::ok(json!({ "id": id }))),
        Err(e) => Json(ApiEnvelope::err(500, format!("保存合作方案失败: {}", e))),
    }
}

/// DELETE /api/cooperation_plan/:id
pub async fn delete(Path(id): Path<String>) -> Json<ApiEnvelope<()>> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Json(ApiEnvelope::err(400, "无效的ID")),
    };
    match a003_cooperation_plan::service::delete(uuid).await {
        Ok(true) => Json(ApiEnvelope::ok(())),
        Ok(false) => Json(ApiEnvelope::err(404, "合作方案不存在")),
        Err(e) => {
            tracing::error!("Failed to delete cooperation plan {}: {}", id, e);
            Json(ApiEnvelope::err(500, "删除合作方案失败"))
        }
    }
}
