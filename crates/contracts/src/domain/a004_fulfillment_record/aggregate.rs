use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::fulfillment_stage::{FulfillmentStage, StageField};
use crate::enums::priority_level::PriorityLevel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор записи выполнения (履约单)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FulfillmentRecordId(pub Uuid);

impl FulfillmentRecordId {
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

impl AggregateId for FulfillmentRecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(FulfillmentRecordId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Запись выполнения сотрудничества. Движется по линейной прогрессии этапов
/// от寄样 до завершения; поля этапов заполняются по мере продвижения.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FulfillmentRecord {
    #[serde(flatten)]
    pub base: BaseAggregate<FulfillmentRecordId>,

    #[serde(rename = "influencerId")]
    pub influencer_id: Option<Uuid>,

    #[serde(rename = "productId")]
    pub product_id: Option<Uuid>,

    #[serde(rename = "planId")]
    pub plan_id: Option<Uuid>,

    // Код этапа хранится как есть: неизвестный код из БД не перетолковывается,
    // такая запись терминальна для прогрессии и показывается сквозным кодом
    pub stage: String,

    pub priority: PriorityLevel,

    pub remark: Option<String>,

    // Поля этапов — осмысленны только после достижения вводящего их этапа
    #[serde(rename = "trackingNumber")]
    pub tracking_number: Option<String>,

    #[serde(rename = "receivedAt")]
    pub received_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,

    #[serde(rename = "videoId")]
    pub video_id: Option<String>,

    #[serde(rename = "adCode")]
    pub ad_code: Option<String>,

    #[serde(rename = "adRoi")]
    pub ad_roi: Option<f64>,

    pub tags: Vec<String>,
}

impl FulfillmentRecord {
    /// Создать новую запись. Начальный этап всегда `Pending`.
    pub fn new_for_insert(
        code: String,
        description: String,
        influencer_id: Option<Uuid>,
        product_id: Option<Uuid>,
        plan_id: Option<Uuid>,
        priority: PriorityLevel,
        remark: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(FulfillmentRecordId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            influencer_id,
            product_id,
            plan_id,
            stage: FulfillmentStage::Pending.code().to_string(),
            priority,
            remark,
            tracking_number: None,
            received_at: None,
            video_url: None,
            video_id: None,
            ad_code: None,
            ad_roi: None,
            tags: Vec::new(),
        }
    }

    /// Обновить «шапку» записи из DTO. Этап через этот путь не меняется —
    /// только через [`FulfillmentRecord::advance_to`].
    pub fn update(&mut self, dto: &FulfillmentRecordDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.influencer_id = dto
            .influencer_id
            .as_ref()
            .and_then(|s| Uuid::parse_str(s).ok());
        self.product_id = dto
            .product_id
            .as_ref()
            .and_then(|s| Uuid::parse_str(s).ok());
        self.plan_id = dto.plan_id.as_ref().and_then(|s| Uuid::parse_str(s).ok());
        self.priority = dto.priority.unwrap_or(PriorityLevel::Medium);
        self.remark = dto.remark.clone();
        self.tags = dto.tags.clone();
    }

    /// Перевести запись на следующий этап.
    ///
    /// Цель обязана входить в `advance_targets` текущего этапа. Из полезной
    /// нагрузки применяются только поля, уместные на целевом этапе; остальные
    /// молча игнорируются.
    pub fn advance_to(
        &mut self,
        target: FulfillmentStage,
        payload: &AdvancePayload,
    ) -> Result<(), String> {
        let allowed = FulfillmentStage::advance_targets_of(&self.stage);
        if !allowed.contains(&target) {
            return Err(format!(
                "无法从 {} 转到 {}",
                FulfillmentStage::display_name_of(&self.stage),
                target.display_name()
            ));
        }

        for field in target.extra_fields() {
            match field {
                StageField::TrackingNumber => {
                    if payload.tracking_number.is_some() {
                        self.tracking_number = payload.tracking_number.clone();
                    }
                }
                StageField::ReceivedAt => {
                    if payload.received_at.is_some() {
                        self.received_at = payload.received_at;
                    }
                }
                StageField::VideoUrl => {
                    if payload.video_url.is_some() {
                        self.video_url = payload.video_url.clone();
                    }
                }
                StageField::VideoId => {
                    if payload.video_id.is_some() {
                        self.video_id = payload.video_id.clone();
                    }
                }
                StageField::AdCode => {
                    if payload.ad_code.is_some() {
                        self.ad_code = payload.ad_code.clone();
                    }
                }
                StageField::AdRoi => {
                    if payload.ad_roi.is_some() {
                        self.ad_roi = payload.ad_roi;
                    }
                }
            }
        }

        self.stage = target.code().to_string();
        Ok(())
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("履约单标题不能为空".into());
        }
        if self.influencer_id.is_none() {
            return Err("必须选择达人".into());
        }
        if self.product_id.is_none() {
            return Err("必须选择商品".into());
        }
        if let Some(roi) = self.ad_roi {
            if roi < 0.0 {
                return Err("ROI不能为负".into());
            }
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for FulfillmentRecord {
    type Id = FulfillmentRecordId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "fulfillment_record"
    }

    fn element_name() -> &'static str {
        "履约单"
    }

    fn list_name() -> &'static str {
        "履约单列表"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления записи выполнения
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FulfillmentRecordDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "influencerId")]
    pub influencer_id: Option<String>,
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
    #[serde(rename = "planId")]
    pub plan_id: Option<String>,
    pub priority: Option<PriorityLevel>,
    pub remark: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub comment: Option<String>,
}

/// Полезная нагрузка перевода этапа: поля, вводимые конкретным этапом
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdvancePayload {
    #[serde(rename = "trackingNumber")]
    pub tracking_number: Option<String>,
    #[serde(rename = "receivedAt")]
    pub received_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    #[serde(rename = "adCode")]
    pub ad_code: Option<String>,
    #[serde(rename = "adRoi")]
    pub ad_roi: Option<f64>,
}

/// Запрос перевода записи на другой этап
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceRequest {
    /// Код целевого этапа (например, "received")
    pub target: String,
    #[serde(flatten)]
    pub payload: AdvancePayload,
}

/// Описание доступной цели перевода для UI диалога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceTargetInfo {
    pub stage: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "extraFields")]
    pub extra_fields: Vec<StageField>,
}

impl AdvanceTargetInfo {
    pub fn for_stage(stage: FulfillmentStage) -> Self {
        Self {
            stage: stage.code().to_string(),
            display_name: stage.display_name().to_string(),
            extra_fields: stage.extra_fields().to_vec(),
        }
    }

    /// Доступные цели перевода для произвольного (возможно, неизвестного)
    /// кода текущего этапа
    pub fn targets_of(current: &str) -> Vec<Self> {
        FulfillmentStage::advance_targets_of(current)
            .into_iter()
            .map(Self::for_stage)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FulfillmentRecord {
        FulfillmentRecord::new_for_insert(
            "FUL-001".into(),
            "美妆小鹿 x 美白精华液".into(),
            Some(Uuid::new_v4()),
            Some(Uuid::new_v4()),
            None,
            PriorityLevel::High,
            None,
            None,
        )
    }

    #[test]
    fn test_new_record_starts_pending() {
        assert_eq!(record().stage, "pending");
    }

    #[test]
    fn test_advance_applies_only_relevant_fields() {
        let mut rec = record();
        let payload = AdvancePayload {
            tracking_number: Some("SF123456".into()),
            // ROI уместен только на этапе sales_conversion — должен игнорироваться
            ad_roi: Some(3.5),
            ..Default::default()
        };
        rec.advance_to(FulfillmentStage::Sent, &payload).unwrap();
        assert_eq!(rec.stage, "sent");
        assert_eq!(rec.tracking_number.as_deref(), Some("SF123456"));
        assert_eq!(rec.ad_roi, None);
    }

    #[test]
    fn test_advance_rejects_skipping_stages() {
        let mut rec = record();
        let err = rec.advance_to(FulfillmentStage::Published, &AdvancePayload::default());
        assert!(err.is_err());
        assert_eq!(rec.stage, "pending");
    }

    #[test]
    fn test_cancel_allowed_from_any_non_terminal_stage() {
        let mut rec = record();
        rec.advance_to(FulfillmentStage::Sent, &AdvancePayload::default())
            .unwrap();
        rec.advance_to(FulfillmentStage::Canceled, &AdvancePayload::default())
            .unwrap();
        assert_eq!(rec.stage, "canceled");
        // Из отменённой записи выходов нет
        assert!(rec
            .advance_to(FulfillmentStage::Received, &AdvancePayload::default())
            .is_err());
    }

    #[test]
    fn test_unknown_stage_code_is_terminal_for_advance() {
        // Код этапа, которого этот клиент ещё не знает (например, записан
        // более новой версией системы), должен сохраняться как есть и
        // блокировать любые переводы
        let mut rec = record();
        rec.stage = "mystery_future_stage".into();

        assert!(AdvanceTargetInfo::targets_of(&rec.stage).is_empty());
        assert!(rec
            .advance_to(FulfillmentStage::Sent, &AdvancePayload::default())
            .is_err());
        assert!(rec
            .advance_to(FulfillmentStage::Canceled, &AdvancePayload::default())
            .is_err());
        assert_eq!(rec.stage, "mystery_future_stage");
    }

    #[test]
    fn test_validate_rejects_negative_roi() {
        let mut rec = record();
        rec.ad_roi = Some(-0.1);
        assert!(rec.validate().is_err());

        rec.ad_roi = Some(0.0);
        assert!(rec.validate().is_ok());
    }

    #[test]
    fn test_advance_target_info_for_sent() {
        let targets = AdvanceTargetInfo::targets_of("sent");
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].stage, "received");
        assert_eq!(targets[0].display_name, "已签收");
        assert_eq!(
            targets[0].extra_fields,
            vec![StageField::TrackingNumber, StageField::ReceivedAt]
        );
        assert_eq!(targets[1].stage, "canceled");
        assert!(targets[1].extra_fields.is_empty());
    }

    #[test]
    fn test_advance_target_info_terminal_and_unknown() {
        assert!(AdvanceTargetInfo::targets_of("completed").is_empty());
        assert!(AdvanceTargetInfo::targets_of("no_such_stage").is_empty());
    }
}
