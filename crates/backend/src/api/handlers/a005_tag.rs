use axum::{extract::Path, Json};
use contracts::domain::a005_tag::aggregate::{Tag, TagDto};
use contracts::shared::ApiEnvelope;
use serde_json::json;

use crate::domain::a005_tag;

/// GET /api/tag
pub async fn list_all() -> Json<ApiEnvelope<Vec<Tag>>> {
    match a005_tag::service::list_all().await {
        Ok(v) => Json(ApiEnvelope::ok(v)),
        Err(e) => {
            tracing::error!("Failed to list tags: {}", e);
            Json(ApiEnvelope::err(500, "查询标签列表失败"))
        }
    }
}

/// GET /api/tag/:id
pub async fn get_by_id(Path(id): Path<String>) -> Json<ApiEnvelope<Tag>> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Json(ApiEnvelope::err(400, "无效的ID")),
    };
    match a005_tag::service::get_by_id(uuid).await {
        Ok(Some(v)) => Json(ApiEnvelope::ok(v)),
        Ok(None) => Json(ApiEnvelope::err(404, "标签不存在")),
        Err(e) => {
            tracing::error!("Failed to get tag {}: {}", id, e);
            Json(ApiEnvelope::err(500, "查询标签失败"))
        }
    }
}

/// POST /api/tag
pub async fn upsert(Json(dto): Json<TagDto>) -> Json<ApiEnvelope<serde_json::Value>> {
    let result = if dto.id.is_some() {
        a005_tag::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a005_tag::service::create(dto).await.map(|id| id.to_string())
    };
    match result {
        Ok(id) => Json(ApiEnvelope::ok(json!({ "id": id }))),
        Err(e) => Json(ApiEnvelope::err(500, format!("保存标签失败: {}", e))),
    }
}

/// DELETE /api/tag/:id
pub async fn delete(Path(id): Path<String>) -> Json<ApiEnvelope<()>> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Json(ApiEnvelope::err(400, "无效的ID")),
    };
    match a005_tag::service::delete(uuid).await {
        Ok(true) => Json(ApiEnvelope::ok(())),
        Ok(false) => Json(ApiEnvelope::err(404, "标签不存在")),
        Err(e) => {
            tracing::error!("Failed to delete tag {}: {}", id, e);
            Json(ApiEnvelope::err(500, "删除标签失败"))
        }
    }
}
