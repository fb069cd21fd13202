use serde::{Deserialize, Serialize};

/// Этапы выполнения сотрудничества (fulfillment lifecycle).
///
/// Прогрессия строго линейная и однонаправленная:
/// `Pending → Sent → Received → ContentCreated → Published → SalesConversion → Completed`.
/// `Canceled` достижим из любого нетерминального этапа; `Timeout` выставляется
/// внешним мониторингом и в прогрессии не участвует (распознаётся только для
/// отображения).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStage {
    Pending,
    Sent,
    Received,
    ContentCreated,
    Published,
    SalesConversion,
    Completed,
    Canceled,
    Timeout,
}

/// Дополнительные поля формы, уместные на конкретном этапе.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StageField {
    TrackingNumber,
    ReceivedAt,
    VideoUrl,
    VideoId,
    AdCode,
    AdRoi,
}

/// Порядок прямой прогрессии. Индекс в массиве определяет единственный
/// допустимый следующий этап.
const PROGRESSION: [FulfillmentStage; 7] = [
    FulfillmentStage::Pending,
    FulfillmentStage::Sent,
    FulfillmentStage::Received,
    FulfillmentStage::ContentCreated,
    FulfillmentStage::Published,
    FulfillmentStage::SalesConversion,
    FulfillmentStage::Completed,
];

impl FulfillmentStage {
    /// Получить код этапа
    pub fn code(&self) -> &'static str {
        match self {
            FulfillmentStage::Pending => "pending",
            FulfillmentStage::Sent => "sent",
            FulfillmentStage::Received => "received",
            FulfillmentStage::ContentCreated => "content_created",
            FulfillmentStage::Published => "published",
            FulfillmentStage::SalesConversion => "sales_conversion",
            FulfillmentStage::Completed => "completed",
            FulfillmentStage::Canceled => "canceled",
            FulfillmentStage::Timeout => "timeout",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            FulfillmentStage::Pending => "待寄样",
            FulfillmentStage::Sent => "已寄样",
            FulfillmentStage::Received => "已签收",
            FulfillmentStage::ContentCreated => "已创作",
            FulfillmentStage::Published => "已发布",
            FulfillmentStage::SalesConversion => "销售转化",
            FulfillmentStage::Completed => "已完成",
            FulfillmentStage::Canceled => "已取消",
            FulfillmentStage::Timeout => "已超时",
        }
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(FulfillmentStage::Pending),
            "sent" => Some(FulfillmentStage::Sent),
            "received" => Some(FulfillmentStage::Received),
            "content_created" => Some(FulfillmentStage::ContentCreated),
            "published" => Some(FulfillmentStage::Published),
            "sales_conversion" => Some(FulfillmentStage::SalesConversion),
            "completed" => Some(FulfillmentStage::Completed),
            "canceled" => Some(FulfillmentStage::Canceled),
            "timeout" => Some(FulfillmentStage::Timeout),
            _ => None,
        }
    }

    /// Все этапы прямой прогрессии, по порядку
    pub fn progression() -> &'static [FulfillmentStage] {
        &PROGRESSION
    }

    /// Единственный следующий этап прямой прогрессии.
    ///
    /// `None` для `Completed`, `Canceled` и `Timeout` (терминальных с точки
    /// зрения прогрессии).
    pub fn next_stage(&self) -> Option<FulfillmentStage> {
        let idx = PROGRESSION.iter().position(|s| s == self)?;
        PROGRESSION.get(idx + 1).copied()
    }

    /// Этапы, доступные для ручного перевода записи.
    ///
    /// Порядок фиксирован: сначала следующий этап, затем `Canceled` — он
    /// определяет порядок пунктов в диалоге перевода этапа.
    pub fn advance_targets(&self) -> Vec<FulfillmentStage> {
        match self.next_stage() {
            Some(next) => vec![next, FulfillmentStage::Canceled],
            None => Vec::new(),
        }
    }

    /// Дополнительные поля, уместные при переводе на данный этап
    pub fn extra_fields(&self) -> &'static [StageField] {
        match self {
            FulfillmentStage::Sent => &[StageField::TrackingNumber],
            FulfillmentStage::Received => &[StageField::TrackingNumber, StageField::ReceivedAt],
            FulfillmentStage::Published => &[StageField::VideoUrl, StageField::VideoId],
            FulfillmentStage::SalesConversion => &[
                StageField::VideoUrl,
                StageField::VideoId,
                StageField::AdCode,
                StageField::AdRoi,
            ],
            _ => &[],
        }
    }

    /// Следующий этап для произвольного (возможно, неизвестного) кода.
    /// Неизвестные коды трактуются как терминальные.
    pub fn next_stage_of(code: &str) -> Option<FulfillmentStage> {
        Self::from_code(code).and_then(|s| s.next_stage())
    }

    /// Доступные для перевода этапы для произвольного кода.
    /// Неизвестные коды дают пустой список.
    pub fn advance_targets_of(code: &str) -> Vec<FulfillmentStage> {
        Self::from_code(code)
            .map(|s| s.advance_targets())
            .unwrap_or_default()
    }

    /// Название для произвольного кода. Неизвестные коды проходят без
    /// изменений — бэкенд может прислать этап, которого этот клиент ещё
    /// не знает, и UI не должен на этом падать.
    pub fn display_name_of(code: &str) -> String {
        match Self::from_code(code) {
            Some(stage) => stage.display_name().to_string(),
            None => code.to_string(),
        }
    }
}

impl ToString for FulfillmentStage {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stage_follows_progression_order() {
        let stages = FulfillmentStage::progression();
        for pair in stages.windows(2) {
            assert_eq!(pair[0].next_stage(), Some(pair[1]));
        }
    }

    #[test]
    fn test_terminal_stages_have_no_next() {
        assert_eq!(FulfillmentStage::Completed.next_stage(), None);
        assert_eq!(FulfillmentStage::Canceled.next_stage(), None);
        assert_eq!(FulfillmentStage::Timeout.next_stage(), None);
    }

    #[test]
    fn test_unknown_code_is_terminal() {
        assert_eq!(FulfillmentStage::next_stage_of("unknown_value"), None);
        assert!(FulfillmentStage::advance_targets_of("unknown_value").is_empty());
    }

    #[test]
    fn test_advance_targets_are_next_plus_cancel() {
        for stage in FulfillmentStage::progression() {
            let targets = stage.advance_targets();
            match stage.next_stage() {
                Some(next) => {
                    assert_eq!(targets, vec![next, FulfillmentStage::Canceled]);
                }
                None => assert!(targets.is_empty()),
            }
        }
    }

    #[test]
    fn test_sent_offers_received_then_canceled() {
        assert_eq!(
            FulfillmentStage::Sent.advance_targets(),
            vec![FulfillmentStage::Received, FulfillmentStage::Canceled]
        );
    }

    #[test]
    fn test_completed_and_canceled_offer_nothing() {
        assert!(FulfillmentStage::Completed.advance_targets().is_empty());
        assert!(FulfillmentStage::Canceled.advance_targets().is_empty());
    }

    #[test]
    fn test_extra_fields_per_stage() {
        assert_eq!(
            FulfillmentStage::Sent.extra_fields(),
            &[StageField::TrackingNumber]
        );
        assert_eq!(
            FulfillmentStage::Received.extra_fields(),
            &[StageField::TrackingNumber, StageField::ReceivedAt]
        );
        assert_eq!(
            FulfillmentStage::Published.extra_fields(),
            &[StageField::VideoUrl, StageField::VideoId]
        );
        assert_eq!(
            FulfillmentStage::SalesConversion.extra_fields(),
            &[
                StageField::VideoUrl,
                StageField::VideoId,
                StageField::AdCode,
                StageField::AdRoi,
            ]
        );
        assert!(FulfillmentStage::Pending.extra_fields().is_empty());
        assert!(FulfillmentStage::ContentCreated.extra_fields().is_empty());
        assert!(FulfillmentStage::Completed.extra_fields().is_empty());
        assert!(FulfillmentStage::Canceled.extra_fields().is_empty());
    }

    #[test]
    fn test_display_name_known_and_passthrough() {
        assert_eq!(FulfillmentStage::Pending.display_name(), "待寄样");
        assert_eq!(FulfillmentStage::display_name_of("sent"), "已寄样");
        assert_eq!(
            FulfillmentStage::display_name_of("not_a_real_stage"),
            "not_a_real_stage"
        );
    }

    #[test]
    fn test_code_roundtrip() {
        for stage in [
            FulfillmentStage::Pending,
            FulfillmentStage::Sent,
            FulfillmentStage::Received,
            FulfillmentStage::ContentCreated,
            FulfillmentStage::Published,
            FulfillmentStage::SalesConversion,
            FulfillmentStage::Completed,
            FulfillmentStage::Canceled,
            FulfillmentStage::Timeout,
        ] {
            assert_eq!(FulfillmentStage::from_code(stage.code()), Some(stage));
        }
    }

    #[test]
    fn test_timeout_recognized_for_display_but_inert() {
        assert_eq!(FulfillmentStage::display_name_of("timeout"), "已超时");
        assert!(FulfillmentStage::Timeout.advance_targets().is_empty());
    }
}
