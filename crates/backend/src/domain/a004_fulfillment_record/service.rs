use super::repository;
use contracts::domain::a004_fulfillment_record::aggregate::{
    AdvanceRequest, AdvanceTargetInfo, FulfillmentRecord, FulfillmentRecordDto,
};
use contracts::enums::fulfillment_stage::FulfillmentStage;
use contracts::enums::priority_level::PriorityLevel;
use uuid::Uuid;

/// Создание новой записи выполнения. Этап всегда `pending`.
pub async fn create(dto: FulfillmentRecordDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("FUL-{}", Uuid::new_v4()));
    let mut aggregate = FulfillmentRecord::new_for_insert(
        code,
        dto.description.clone(),
        dto.influencer_id
            .as_ref()
            .and_then(|s| Uuid::parse_str(s).ok()),
        dto.product_id.as_ref().and_then(|s| Uuid::parse_str(s).ok()),
        dto.plan_id.as_ref().and_then(|s| Uuid::parse_str(s).ok()),
        dto.priority.unwrap_or(PriorityLevel::Medium),
        dto.remark.clone(),
        dto.comment.clone(),
    );
    aggregate.tags = dto.tags.clone();

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Обновление «шапки» записи. Этап здесь не трогаем — только через advance.
pub async fn update(dto: FulfillmentRecordDto) -> anyhow::Result<()> {
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

/// Мягкое удаление записи
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

/// Получение записи по ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<FulfillmentRecord>> {
    repository::get_by_id(id).await
}

/// Получение списка всех записей
pub async fn list_all() -> anyhow::Result<Vec<FulfillmentRecord>> {
    repository::list_all().await
}

/// Доступные цели перевода для записи (для диалога в UI)
pub async fn advance_targets(id: Uuid) -> anyhow::Result<Vec<AdvanceTargetInfo>> {
    let aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;
    Ok(AdvanceTargetInfo::targets_of(&aggregate.stage))
}

/// Перевод записи на следующий этап.
///
/// Цель обязана входить в advance_targets текущего этапа; из полезной
/// нагрузки применяются только поля целевого этапа.
pub async fn advance(id: Uuid, request: AdvanceRequest) -> anyhow::Result<FulfillmentRecord> {
    let target = FulfillmentStage::from_code(&request.target)
        .ok_or_else(|| anyhow::anyhow!("Unknown stage: {}", request.target))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate
        .advance_to(target, &request.payload)
        .map_err(|e| anyhow::anyhow!(e))?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    tracing::info!(
        record = %aggregate.base.code,
        stage = target.code(),
        "fulfillment record advanced"
    );
    Ok(aggregate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_fulfillment_record::aggregate::AdvancePayload;

    async fn init_db() {
        crate::shared::data::db::initialize_database(Some("target/db/backend_test.db"))
            .await
            .expect("test db init");
    }

    fn new_dto(title: &str) -> FulfillmentRecordDto {
        FulfillmentRecordDto {
            id: None,
            code: None,
            description: title.into(),
            influencer_id: Some(Uuid::new_v4().to_string()),
            product_id: Some(Uuid::new_v4().to_string()),
            plan_id: None,
            priority: Some(PriorityLevel::High),
            remark: None,
            tags: vec![],
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_advance_walks_forward_one_step() {
        init_db().await;
        let id = create(new_dto("寄样流程测试")).await.unwrap();

        let targets = advance_targets(id).await.unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].stage, "sent");
        assert_eq!(targets[1].stage, "canceled");

        let updated = advance(
            id,
            AdvanceRequest {
                target: "sent".into(),
                payload: AdvancePayload {
                    tracking_number: Some("SF998877".into()),
                    ..Default::default()
                },
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.stage, "sent");
        assert_eq!(updated.tracking_number.as_deref(), Some("SF998877"));

        let stored = get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.stage, "sent");
    }

    #[tokio::test]
    async fn test_advance_rejects_stage_skip() {
        init_db().await;
        let id = create(new_dto("跳级应被拒绝")).await.unwrap();

        let result = advance(
            id,
            AdvanceRequest {
                target: "published".into(),
                payload: AdvancePayload::default(),
            },
        )
        .await;
        assert!(result.is_err());

        let stored = get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.stage, "pending");
    }

    #[tokio::test]
    async fn test_advance_rejects_unknown_stage() {
        init_db().await;
        let id = create(new_dto("未知状态应被拒绝")).await.unwrap();

        let result = advance(
            id,
            AdvanceRequest {
                target: "no_such_stage".into(),
                payload: AdvancePayload::default(),
            },
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_record_with_unrecognized_stored_stage_is_terminal() {
        use sea_orm::{ActiveModelTrait, EntityTrait, Set};

        init_db().await;
        let id = create(new_dto("未来版本写入的状态")).await.unwrap();

        // Этап, записанный более новой версией системы
        let model = repository::Entity::find_by_id(id.to_string())
            .one(crate::shared::data::db::get_connection())
            .await
            .unwrap()
            .unwrap();
        let mut active: repository::ActiveModel = model.into();
        active.stage = Set("mystery_future_stage".into());
        active
            .update(crate::shared::data::db::get_connection())
            .await
            .unwrap();

        let targets = advance_targets(id).await.unwrap();
        assert!(targets.is_empty());

        let result = advance(
            id,
            AdvanceRequest {
                target: "sent".into(),
                payload: AdvancePayload::default(),
            },
        )
        .await;
        assert!(result.is_err());

        // Код сохраняется как есть, без перетолкования
        let stored = get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.stage, "mystery_future_stage");
    }

    #[tokio::test]
    async fn test_canceled_record_has_no_targets() {
        init_db().await;
        let id = create(new_dto("取消后无去向")).await.unwrap();

        advance(
            id,
            AdvanceRequest {
                target: "canceled".into(),
                payload: AdvancePayload::default(),
            },
        )
        .await
        .unwrap();

        let targets = advance_targets(id).await.unwrap();
        assert!(targets.is_empty());
    }
}
