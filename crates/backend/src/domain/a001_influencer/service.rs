use super::repository;
use contracts::domain::a001_influencer::aggregate::{Influencer, InfluencerDto};
use contracts::enums::platform::Platform;
use uuid::Uuid;

/// Создание нового блогера
pub async fn create(dto: InfluencerDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("INF-{}", Uuid::new_v4()));
    let mut aggregate = Influencer::new_for_insert(
        code,
        dto.nickname,
        dto.platform,
        dto.platform_account_id,
        dto.follower_count,
        dto.contact,
        dto.region,
        dto.bd_owner,
        dto.tags,
        dto.comment,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Обновление существующего блогера
pub async fn update(dto: InfluencerDto) -> anyhow::Result<()> {
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

/// Мягкое удаление блогера
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

/// Получение блогера по ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Influencer>> {
    repository::get_by_id(id).await
}

/// Получение списка всех блогеров
pub async fn list_all() -> anyhow::Result<Vec<Influencer>> {
    repository::list_all().await
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = vec![
        InfluencerDto {
            id: None,
            code: Some("INF-0001".into()),
            nickname: "美妆小鹿".into(),
            platform: Some(Platform::Douyin),
            platform_account_id: "dy88001".into(),
            follower_count: 1_250_000,
            contact: Some("wx:xiaolu2024".into()),
            region: Some("杭州".into()),
            bd_owner: Some("王磊".into()),
            tags: vec!["美妆".into(), "种草".into()],
            comment: None,
        },
        InfluencerDto {
            id: None,
            code: Some("INF-0002".into()),
            nickname: "数码老张".into(),
            platform: Some(Platform::Bilibili),
            platform_account_id: "bl20077".into(),
            follower_count: 430_000,
            contact: Some("13800001111".into()),
            region: Some("深圳".into()),
            bd_owner: Some("李娜".into()),
            tags: vec!["数码".into(), "测评".into()],
            comment: None,
        },
        InfluencerDto {
            id: None,
            code: Some("INF-0003".into()),
            nickname: "厨房里的阿姨".into(),
            platform: Some(Platform::Xiaohongshu),
            platform_account_id: "xhs5120".into(),
            follower_count: 86_000,
            contact: None,
            region: Some("成都".into()),
            bd_owner: Some("王磊".into()),
            tags: vec!["美食".into()],
            comment: None,
        },
    ];

    for dto in data {
        create(dto).await?;
    }
    Ok(())
}
