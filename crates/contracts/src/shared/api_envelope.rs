use serde::{Deserialize, Serialize};

/// Единый конверт ответа API: `{code, msg, data}`.
///
/// `code == 0` — успех, любое другое значение — ошибка с текстом в `msg`.
/// Все ручки бэкенда отвечают этим конвертом, фронтенд разбирает только его.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i32,
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Успешный ответ с данными
    pub fn ok(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".into(),
            data: Some(data),
        }
    }

    /// Ошибка с кодом и сообщением
    pub fn err(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == 0
    }

    /// Преобразовать в `Result`, забрав данные
    pub fn into_result(self) -> Result<T, String> {
        if self.code == 0 {
            self.data.ok_or_else(|| "empty data".to_string())
        } else {
            Err(self.msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope() {
        let env = ApiEnvelope::ok(42);
        assert!(env.is_ok());
        assert_eq!(env.into_result(), Ok(42));
    }

    #[test]
    fn test_err_envelope() {
        let env: ApiEnvelope<i32> = ApiEnvelope::err(500, "内部错误");
        assert!(!env.is_ok());
        assert_eq!(env.into_result(), Err("内部错误".to_string()));
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(ApiEnvelope::ok("x")).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["msg"], "ok");
        assert_eq!(json["data"], "x");

        let parsed: ApiEnvelope<String> =
            serde_json::from_str(r#"{"code":1,"msg":"boom","data":null}"#).unwrap();
        assert_eq!(parsed.code, 1);
        assert_eq!(parsed.into_result(), Err("boom".to_string()));
    }
}
