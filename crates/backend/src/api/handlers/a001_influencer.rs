use axum::{extract::Path, Json};
use contracts::domain::a001_influencer::aggregate::{Influencer, InfluencerDto};
use contracts::shared::ApiEnvelope;
use serde_json::json;

use crate::domain::a001_influencer;

/// GET /api/influencer
pub async fn list_all() -> Json<ApiEnvelope<Vec<Influencer>>> {
    match a001_influencer::service::list_all().await {
        Ok(v) => Json(ApiEnvelope::ok(v)),
        Err(e) => {
            tracing::error!("Failed to list influencers: {}", e);
            Json(ApiEnvelope::err(500, "查询达人列表失败"))
        }
    }
}

/// GET /api/influencer/:id
pub async fn get_by_id(Path(id): Path<String>) -> Json<ApiEnvelope<Influencer>> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Json(ApiEnvelope::err(400, "无效的ID")),
    };
    match a001_influencer::service::get_by_id(uuid).await {
        Ok(Some(v)) => Json(ApiEnvelope::ok(v)),
        Ok(None) => Json(ApiEnvelope::err(404, "达人不存在")),
        Err(e) => {
            tracing::error!("Failed to get influencer {}: {}", id, e);
            Json(ApiEnvelope::err(500, "查询达人失败"))
        }
    }
}

/// POST /api/influencer — вставка при пустом id, иначе обновление
pub async fn upsert(Json(dto): Json<InfluencerDto>) -> Json<ApiEnvelope<serde_json::Value>> {
    let result = if dto.id.is_some() {
        a001_influencer::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a001_influencer::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Json(ApiEnvelope::ok(json!({ "id": id }))),
        Err(e) => Json(ApiEnvelope::err(500, format!("保存达人失败: {}", e))),
    }
}

/// DELETE /api/influencer/:id
pub async fn delete(Path(id): Path<String>) -> Json<ApiEnvelope<()>> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Json(ApiEnvelope::err(400, "无效的ID")),
    };
    match a001_influencer::service::delete(uuid).await {
        Ok(true) => Json(ApiEnvelope::ok(())),
        Ok(false) => Json(ApiEnvelope::err(404, "达人不存在")),
        Err(e) => {
            tracing::error!("Failed to delete influencer {}: {}", id, e);
            Json(ApiEnvelope::err(500, "删除达人失败"))
        }
    }
}

/// POST /api/influencer/testdata
pub async fn insert_test_data() -> Json<ApiEnvelope<()>> {
    match a001_influencer::service::insert_test_data().await {
        Ok(()) => Json(ApiEnvelope::ok(())),
        Err(e) => Json(ApiEnvelope::err(500, format!("插入测试数据失败: {}", e))),
    }
}
