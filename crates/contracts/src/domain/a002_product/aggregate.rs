use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара для сотрудничества (合作商品)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар для сотрудничества. `description` базового агрегата хранит название.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    pub sku: String,

    /// Цена за единицу, юани
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,

    /// Ставка комиссии, проценты
    #[serde(rename = "commissionRate")]
    pub commission_rate: f64,

    /// Доступен ли товар для бесплатной рассылки образцов
    #[serde(rename = "sampleAvailable")]
    pub sample_available: bool,
}

impl Product {
    /// Создать новый товар для вставки в БД
    pub fn new_for_insert(
        code: String,
        name: String,
        sku: String,
        unit_price: f64,
        commission_rate: f64,
        sample_available: bool,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ProductId::new_v4(), code, name);
        base.comment = comment;

        Self {
            base,
            sku,
            unit_price,
            commission_rate,
            sample_available,
        }
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &ProductDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.sku = dto.sku.clone();
        self.unit_price = dto.unit_price;
        self.commission_rate = dto.commission_rate;
        self.sample_available = dto.sample_available;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("商品名称不能为空".into());
        }
        if self.sku.trim().is_empty() {
            return Err("SKU不能为空".into());
        }
        if self.unit_price < 0.0 {
            return Err("价格不能为负".into());
        }
        if !(0.0..=100.0).contains(&self.commission_rate) {
            return Err("佣金率必须在0到100之间".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "合作商品"
    }

    fn list_name() -> &'static str {
        "合作商品列表"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления товара
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(rename = "unitPrice", default)]
    pub unit_price: f64,
    #[serde(rename = "commissionRate", default)]
    pub commission_rate: f64,
    #[serde(rename = "sampleAvailable", default)]
    pub sample_available: bool,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_commission_rate_bounds() {
        let mut product = Product::new_for_insert(
            "PRD-001".into(),
            "美白精华液".into(),
            "SKU-8801".into(),
            199.0,
            15.0,
            true,
            None,
        );
        assert!(product.validate().is_ok());

        product.commission_rate = 120.0;
        assert!(product.validate().is_err());

        product.commission_rate = -5.0;
        assert!(product.validate().is_err());
    }
}
