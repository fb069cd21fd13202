use serde::{Deserialize, Serialize};

/// Формы сотрудничества с блогером
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CooperationType {
    FreeSample,
    PaidPromotion,
    CommissionOnly,
}

impl CooperationType {
    /// Получить код формы сотрудничества
    pub fn code(&self) -> &'static str {
        match self {
            CooperationType::FreeSample => "free_sample",
            CooperationType::PaidPromotion => "paid_promotion",
            CooperationType::CommissionOnly => "commission_only",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            CooperationType::FreeSample => "免费寄样",
            CooperationType::PaidPromotion => "付费推广",
            CooperationType::CommissionOnly => "纯佣合作",
        }
    }

    /// Все формы сотрудничества
    pub fn all() -> Vec<CooperationType> {
        vec![
            CooperationType::FreeSample,
            CooperationType::PaidPromotion,
            CooperationType::CommissionOnly,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "free_sample" => Some(CooperationType::FreeSample),
            "paid_promotion" => Some(CooperationType::PaidPromotion),
            "commission_only" => Some(CooperationType::CommissionOnly),
            _ => None,
        }
    }
}

impl ToString for CooperationType {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
