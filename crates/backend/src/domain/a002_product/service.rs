use super::repository;
use contracts::domain::a002_product::aggregate::{Product, ProductDto};
use uuid::Uuid;

/// Создание нового товара
pub async fn create(dto: ProductDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("PRD-{}", Uuid::new_v4()));
    let mut aggregate = Product::new_for_insert(
        code,
        dto.name,
        dto.sku,
        dto.unit_price,
        dto.commission_rate,
        dto.sample_available,
        dto.comment,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Обновление существующего товара
pub async fn update(dto: ProductDto) -> anyhow::Result<()> {
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

/// Мягкое удаление товара
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

/// Получение товара по ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    repository::get_by_id(id).await
}

/// Получение списка всех товаров
pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    repository::list_all().await
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = vec![
        ProductDto {
            id: None,
            code: Some("PRD-0001".into()),
            name: "美白精华液 30ml".into(),
            sku: "SKU-8801".into(),
            unit_price: 199.0,
            commission_rate: 15.0,
            sample_available: true,
            comment: None,
        },
        ProductDto {
            id: None,
            code: Some("PRD-0002".into()),
            name: "无线蓝牙耳机 Pro".into(),
            sku: "SKU-7702".into(),
            unit_price: 349.0,
            commission_rate: 8.0,
            sample_available: true,
            comment: None,
        },
        ProductDto {
            id: None,
            code: Some("PRD-0003".into()),
            name: "厨房多功能料理机".into(),
            sku: "SKU-6603".into(),
            unit_price: 899.0,
            commission_rate: 10.0,
            sample_available: false,
            comment: Some("高客单价，仅寄样给头部达人".into()),
        },
    ];

    for dto in data {
        create(dto).await?;
    }
    Ok(())
}
