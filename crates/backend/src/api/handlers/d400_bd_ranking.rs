use axum::Json;
use contracts::dashboards::d400_bd_ranking::dto::BdRankingResponse;
use contracts::shared::ApiEnvelope;

use crate::dashboards::d400_bd_ranking;

/// GET /api/dashboards/bd_ranking
pub async fn get_ranking() -> Json<ApiEnvelope<BdRankingResponse>> {
    match d400_bd_ranking::service::get_ranking().await {
        Ok(v) => Json(ApiEnvelope::ok(v)),
        Err(e) => {
            tracing::error!("Failed to build BD ranking: {}", e);
            Json(ApiEnvelope::err(500, "查询BD业绩排行失败"))
        }
    }
}
