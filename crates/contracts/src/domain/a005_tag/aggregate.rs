use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор тега
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagId(pub Uuid);

impl TagId {
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

impl AggregateId for TagId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TagId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Тег. `description` базового агрегата хранит отображаемое имя.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    #[serde(flatten)]
    pub base: BaseAggregate<TagId>,
}

impl Tag {
    /// Создать новый тег для вставки в БД
    pub fn new_for_insert(code: String, name: String, comment: Option<String>) -> Self {
        let mut base = BaseAggregate::new(TagId::new_v4(), code, name);
        base.comment = comment;
        Self { base }
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &TagDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.name.clone();
        self.base.comment = dto.comment.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("标签名不能为空".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Tag {
    type Id = TagId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "tag"
    }

    fn element_name() -> &'static str {
        "标签"
    }

    fn list_name() -> &'static str {
        "标签列表"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления тега
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TagDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub comment: Option<String>,
}
