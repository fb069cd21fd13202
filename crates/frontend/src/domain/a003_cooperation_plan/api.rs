use contracts::domain::a003_cooperation_plan::aggregate::{CooperationPlan, CooperationPlanDto};

use crate::shared::http;

pub async fn list_all() -> Result<Vec<CooperationPlan>, String> {
    http::get_json("/api/cooperation_plan").await
}

pub async fn get_by_id(id: &str) -> Result<CooperationPlan, String> {
    http::get_json(&format!("/api/cooperation_plan/{}", id)).await
}

pub async fn save(dto: &CooperationPlanDto) -> Result<(), String> {
    http::post_json::<_, serde_json::Value>("/api/cooperation_plan", dto)
        .await
        .map(|_| ())
}

pub async fn delete(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/cooperation_plan/{}", id)).await
}
