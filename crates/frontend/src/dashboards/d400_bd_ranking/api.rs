use contracts::dashboards::d400_bd_ranking::dto::BdRankingResponse;

use crate::shared::http;

pub async fn get_ranking() -> Result<BdRankingResponse, String> {
    http::get_json("/api/dashboards/bd_ranking").await
}
