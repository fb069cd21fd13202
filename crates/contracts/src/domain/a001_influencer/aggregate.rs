use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::platform::Platform;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор блогера (达人)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfluencerId(pub Uuid);

impl InfluencerId {
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

impl AggregateId for InfluencerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InfluencerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Блогер/инфлюенсер (达人). `description` базового агрегата хранит никнейм.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Influencer {
    #[serde(flatten)]
    pub base: BaseAggregate<InfluencerId>,

    pub platform: Option<Platform>,

    #[serde(rename = "platformAccountId")]
    pub platform_account_id: String,

    #[serde(rename = "followerCount")]
    pub follower_count: i64,

    /// Контакт: WeChat или телефон
    pub contact: Option<String>,

    pub region: Option<String>,

    /// Ответственный BD-менеджер
    #[serde(rename = "bdOwner")]
    pub bd_owner: Option<String>,

    pub tags: Vec<String>,
}

impl Influencer {
    /// Создать нового блогера для вставки в БД
    pub fn new_for_insert(
        code: String,
        nickname: String,
        platform: Option<Platform>,
        platform_account_id: String,
        follower_count: i64,
        contact: Option<String>,
        region: Option<String>,
        bd_owner: Option<String>,
        tags: Vec<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(InfluencerId::new_v4(), code, nickname);
        base.comment = comment;

        Self {
            base,
            platform,
            platform_account_id,
            follower_count,
            contact,
            region,
            bd_owner,
            tags,
        }
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &InfluencerDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.nickname.clone();
        self.base.comment = dto.comment.clone();
        self.platform = dto.platform;
        self.platform_account_id = dto.platform_account_id.clone();
        self.follower_count = dto.follower_count;
        self.contact = dto.contact.clone();
        self.region = dto.region.clone();
        self.bd_owner = dto.bd_owner.clone();
        self.tags = dto.tags.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("昵称不能为空".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("编号不能为空".into());
        }
        if self.follower_count < 0 {
            return Err("粉丝数不能为负".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Influencer {
    type Id = InfluencerId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "influencer"
    }

    fn element_name() -> &'static str {
        "达人"
    }

    fn list_name() -> &'static str {
        "达人列表"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления блогера
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InfluencerDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub nickname: String,
    pub platform: Option<Platform>,
    #[serde(rename = "platformAccountId", default)]
    pub platform_account_id: String,
    #[serde(rename = "followerCount", default)]
    pub follower_count: i64,
    pub contact: Option<String>,
    pub region: Option<String>,
    #[serde(rename = "bdOwner")]
    pub bd_owner: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_nickname() {
        let mut influencer = Influencer::new_for_insert(
            "INF-001".into(),
            "美妆小鹿".into(),
            Some(Platform::Douyin),
            "dy1001".into(),
            120_000,
            None,
            None,
            Some("王磊".into()),
            vec![],
            None,
        );
        assert!(influencer.validate().is_ok());

        influencer.base.description = "  ".into();
        assert!(influencer.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_followers() {
        let influencer = Influencer::new_for_insert(
            "INF-002".into(),
            "数码老张".into(),
            Some(Platform::Bilibili),
            "bl2002".into(),
            -1,
            None,
            None,
            None,
            vec![],
            None,
        );
        assert!(influencer.validate().is_err());
    }
}
