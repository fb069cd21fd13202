use super::repository;
use contracts::domain::a003_cooperation_plan::aggregate::{CooperationPlan, CooperationPlanDto};
use uuid::Uuid;

/// Создание новой схемы сотрудничества
pub async fn create(dto: CooperationPlanDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("PLAN-{}", Uuid::new_v4()));
    let product_id = dto.product_id.as_ref().and_then(|s| Uuid::parse_str(s).ok());
    let mut aggregate = CooperationPlan::new_for_insert(
        code,
        dto.name,
        product_id,
        dto.cooperation_type,
        dto.fee_amount,
        dto.deliverable,
        dto.comment,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Обновление существующей схемы
pub async fn update(dto: CooperationPlanDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::update(&aggregate).await
}

/// Мягкое удаление схемы
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

/// Получение схемы по ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<CooperationPlan>> {
    repository::get_by_id(id).await
}

/// Получение списка всех схем
pub async fn list_all() -> anyhow::Result<Vec<CooperationPlan>> {
    repository::list_all().await
}
