use axum::{extract::Path, Json};
use contracts::domain::a002_product::aggregate::{Product, ProductDto};
use contracts::shared::ApiEnvelope;
use serde_json::json;

use crate::domain::a002_product;

/// GET /api/product
pub async fn list_all() -> Json<ApiEnvelope<Vec<Product>>> {
    match a002_product::service::list_all().await {
        Ok(v) => Json(ApiEnvelope::ok(v)),
        Err(e) => {
            tracing::error!("Failed to list products: {}", e);
            Json(ApiEnvelope::err(500, "查询商品列表失败"))
        }
    }
}

/// GET /api/product/:id
pub async fn get_by_id(Path(id): Path<String>) -> Json<ApiEnvelope<Product>> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Json(ApiEnvelope::err(400, "无效的ID")),
    };
    match a002_product::service::get_by_id(uuid).await {
        Ok(Some(v)) => Json(ApiEnvelope::ok(v)),
        Ok(None) => Json(ApiEnvelope::err(404, "商品不存在")),
        Err(e) => {
            tracing::error!("Failed to get product {}: {}", id, e);
            Json(ApiEnvelope::err(500, "查询商品失败"))
        }
    }
}

/// POST /api/product
pub async fn upsert(Json(dto): Json<ProductDto>) -> Json<ApiEnvelope<serde_json::Value>> {
    let result = if dto.id.is_some() {
        a002_product::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a002_product::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Json(ApiEnvelope::ok(json!({ "id": id }))),
        Err(e) => Json(ApiEnvelope::err(500, format!("保存商品失败: {}", e))),
    }
}

/// DELETE /api/product/:id
pub async fn delete(Path(id): Path<String>) -> Json<ApiEnvelope<()>> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Json(ApiEnvelope::err(400, "无效的ID")),
    };
    match a002_product::service::delete(uuid).await {
        Ok(true) => Json(ApiEnvelope::ok(())),
        Ok(false) => Json(ApiEnvelope::err(404, "商品不存在")),
        Err(e) => {
            tracing::error!("Failed to delete product {}: {}", id, e);
            Json(ApiEnvelope::err(500, "删除商品失败"))
        }
    }
}

/// POST /api/product/testdata
pub async fn insert_test_data() -> Json<ApiEnvelope<()>> {
    match a002_product::service::insert_test_data().await {
        Ok(()) => Json(ApiEnvelope::ok(())),
        Err(e) => Json(ApiEnvelope::err(500, format!("插入测试数据失败: {}", e))),
    }
}
