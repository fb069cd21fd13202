use serde::{Deserialize, Serialize};

/// Response for the BD performance ranking dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BdRankingResponse {
    /// Rows ordered by rank (best first)
    pub rows: Vec<BdRankingRow>,
}

/// Single BD row in the ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BdRankingRow {
    /// Position in the ranking, starting at 1
    pub rank: u32,
    /// BD staff member name (influencer's bd_owner)
    #[serde(rename = "bdName")]
    pub bd_name: String,
    /// Total non-deleted fulfillment records owned
    #[serde(rename = "totalRecords")]
    pub total_records: i64,
    /// Records that reached `completed`
    #[serde(rename = "completedCount")]
    pub completed_count: i64,
    /// Records currently at `published` or further along the progression
    #[serde(rename = "publishedCount")]
    pub published_count: i64,
    /// Records that exited via `canceled`
    #[serde(rename = "canceledCount")]
    pub canceled_count: i64,
    /// Sum of ad ROI over records that have one
    #[serde(rename = "totalRoi")]
    pub total_roi: f64,
}
