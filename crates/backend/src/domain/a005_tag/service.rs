use super::repository;
use contracts::domain::a005_tag::aggregate::{Tag, TagDto};
use uuid::Uuid;

/// Создание нового тега
pub async fn create(dto: TagDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("TAG-{}", Uuid::new_v4()));
    let mut aggregate = Tag::new_for_insert(code, dto.name, dto.comment);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Обновление существующего тега
pub async fn update(dto: TagDto) -> anyhow::Result<()> {
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

/// Мягкое удаление тега
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

/// Получение тега по ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Tag>> {
    repository::get_by_id(id).await
}

/// Получение списка всех тегов
pub async fn list_all() -> anyhow::Result<Vec<Tag>> {
    repository::list_all().await
}
