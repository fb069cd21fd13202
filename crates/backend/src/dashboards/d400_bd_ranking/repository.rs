use anyhow::Result;
use sea_orm::{FromQueryResult, Statement};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

/// Raw aggregation result from SQL query
#[derive(Debug, Clone, Serialize, Deserialize, FromQueryResult)]
pub struct BdAggregation {
    pub bd_name: String,
    pub total_records: i64,
    pub completed_count: i64,
    pub published_count: i64,
    pub canceled_count: i64,
    pub total_roi: f64,
}

/// Aggregate fulfillment records per BD owner of the influencer.
///
/// `published_count` counts records at `published` or further along the
/// forward progression.
pub async fn get_bd_aggregations() -> Result<Vec<BdAggregation>> {
    let db = get_connection();

    let sql = r#"
        SELECT
            i.bd_owner AS bd_name,
            COUNT(*) AS total_records,
            SUM(CASE WHEN f.stage = 'completed' THEN 1 ELSE 0 END) AS completed_count,
            SUM(CASE WHEN f.stage IN ('published', 'sales_conversion', 'completed') THEN 1 ELSE 0 END) AS published_count,
            SUM(CASE WHEN f.stage = 'canceled' THEN 1 ELSE 0 END) AS canceled_count,
            COALESCE(SUM(f.ad_roi), 0.0) AS total_roi
        FROM a004_fulfillment_record f
        JOIN a001_influencer i ON i.id = f.influencer_id
        WHERE f.is_deleted = 0
          AND i.is_deleted = 0
          AND i.bd_owner IS NOT NULL
          AND i.bd_owner <> ''
        GROUP BY i.bd_owner
        ORDER BY completed_count DESC, total_roi DESC
    "#;

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, sql, []);
    let results = BdAggregation::find_by_statement(stmt).all(db).await?;

    Ok(results)
}
