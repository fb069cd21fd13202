use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::cooperation_type::CooperationType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор схемы сотрудничества (合作方案)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CooperationPlanId(pub Uuid);

impl CooperationPlanId {
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

impl AggregateId for CooperationPlanId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CooperationPlanId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Схема сотрудничества: товар + условия
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CooperationPlan {
    #[serde(flatten)]
    pub base: BaseAggregate<CooperationPlanId>,

    /// Ссылка на товар (a002)
    #[serde(rename = "productId")]
    pub product_id: Option<Uuid>,

    #[serde(rename = "cooperationType")]
    pub cooperation_type: Option<CooperationType>,

    /// Гонорар, юани (для платного продвижения)
    #[serde(rename = "feeAmount")]
    pub fee_amount: f64,

    /// Ожидаемый результат (напр. "одно видео + закреп на 48 часов")
    pub deliverable: Option<String>,
}

impl CooperationPlan {
    /// Создать новую схему для вставки в БД
    pub fn new_for_insert(
        code: String,
        name: String,
        product_id: Option<Uuid>,
        cooperation_type: Option<CooperationType>,
        fee_amount: f64,
        deliverable: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(CooperationPlanId::new_v4(), code, name);
        base.comment = comment;

        Self {
            base,
            product_id,
            cooperation_type,
            fee_amount,
            deliverable,
        }
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &CooperationPlanDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.product_id = dto
            .product_id
            .as_ref()
            .and_then(|s| Uuid::parse_str(s).ok());
        self.cooperation_type = dto.cooperation_type;
        self.fee_amount = dto.fee_amount;
        self.deliverable = dto.deliverable.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("方案名称不能为空".into());
        }
        if self.fee_amount < 0.0 {
            return Err("合作费用不能为负".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for CooperationPlan {
    type Id = CooperationPlanId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "cooperation_plan"
    }

    fn element_name() -> &'static str {
        "合作方案"
    }

    fn list_name() -> &'static str {
        "合作方案列表"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления схемы сотрудничества
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CooperationPlanDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
    #[serde(rename = "cooperationType")]
    pub cooperation_type: Option<CooperationType>,
    #[serde(rename = "feeAmount", default)]
    pub fee_amount: f64,
    pub deliverable: Option<String>,
    pub comment: Option<String>,
}
