use serde::{Deserialize, Serialize};

/// Приоритет записи выполнения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    /// Получить код приоритета
    pub fn code(&self) -> &'static str {
        match self {
            PriorityLevel::High => "high",
            PriorityLevel::Medium => "medium",
            PriorityLevel::Low => "low",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            PriorityLevel::High => "高",
            PriorityLevel::Medium => "中",
            PriorityLevel::Low => "低",
        }
    }

    /// Все приоритеты
    pub fn all() -> Vec<PriorityLevel> {
        vec![
            PriorityLevel::High,
            PriorityLevel::Medium,
            PriorityLevel::Low,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "high" => Some(PriorityLevel::High),
            "medium" => Some(PriorityLevel::Medium),
            "low" => Some(PriorityLevel::Low),
            _ => None,
        }
    }
}

impl ToString for PriorityLevel {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
