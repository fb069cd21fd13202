use super::repository;
use anyhow::Result;
use contracts::dashboards::d400_bd_ranking::dto::{BdRankingResponse, BdRankingRow};

/// Build the BD performance ranking. Rows come back from SQL already
/// ordered; the rank is assigned here, starting at 1.
pub async fn get_ranking() -> Result<BdRankingResponse> {
    let aggregations = repository::get_bd_aggregations().await?;

    let rows = aggregations
        .into_iter()
        .enumerate()
        .map(|(idx, agg)| BdRankingRow {
            rank: (idx + 1) as u32,
            bd_name: agg.bd_name,
            total_records: agg.total_records,
            completed_count: agg.completed_count,
            published_count: agg.published_count,
            canceled_count: agg.canceled_count,
            total_roi: agg.total_roi,
        })
        .collect();

    Ok(BdRankingResponse { rows })
}
