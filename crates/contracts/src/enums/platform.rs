use serde::{Deserialize, Serialize};

/// Контентные платформы, на которых работают блогеры
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Douyin,
    Kuaishou,
    Xiaohongshu,
    Bilibili,
    Weibo,
}

impl Platform {
    /// Получить код платформы
    pub fn code(&self) -> &'static str {
        match self {
            Platform::Douyin => "douyin",
            Platform::Kuaishou => "kuaishou",
            Platform::Xiaohongshu => "xiaohongshu",
            Platform::Bilibili => "bilibili",
            Platform::Weibo => "weibo",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Douyin => "抖音",
            Platform::Kuaishou => "快手",
            Platform::Xiaohongshu => "小红书",
            Platform::Bilibili => "哔哩哔哩",
            Platform::Weibo => "微博",
        }
    }

    /// Все платформы
    pub fn all() -> Vec<Platform> {
        vec![
            Platform::Douyin,
            Platform::Kuaishou,
            Platform::Xiaohongshu,
            Platform::Bilibili,
            Platform::Weibo,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "douyin" => Some(Platform::Douyin),
            "kuaishou" => Some(Platform::Kuaishou),
            "xiaohongshu" => Some(Platform::Xiaohongshu),
            "bilibili" => Some(Platform::Bilibili),
            "weibo" => Some(Platform::Weibo),
            _ => None,
        }
    }
}

impl ToString for Platform {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
