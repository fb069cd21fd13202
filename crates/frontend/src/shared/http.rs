//! Envelope-aware HTTP helpers.
//!
//! Все ручки бэкенда отвечают конвертом `{code, msg, data}`, поэтому
//! каждый запрос здесь разворачивает конверт и возвращает либо данные,
//! либо текст ошибки. Bearer-токен берётся из сессии в памяти.

use contracts::shared::ApiEnvelope;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::system::auth::context;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match context::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("请求失败: {}", e))?;

    if response.status() == 401 {
        return Err("未登录或登录已过期".to_string());
    }

    response
        .json::<ApiEnvelope<T>>()
        .await
        .map_err(|e| format!("响应解析失败: {}", e))?
        .into_result()
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("请求序列化失败: {}", e))?
        .send()
        .await
        .map_err(|e| format!("请求失败: {}", e))?;

    if response.status() == 401 {
        return Err("未登录或登录已过期".to_string());
    }

    response
        .json::<ApiEnvelope<T>>()
        .await
        .map_err(|e| format!("响应解析失败: {}", e))?
        .into_result()
}

/// POST без тела, для ручек вроде /testdata
pub async fn post_empty(path: &str) -> Result<(), String> {
    let response = with_auth(Request::post(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("请求失败: {}", e))?;

    if response.status() == 401 {
        return Err("未登录或登录已过期".to_string());
    }

    check_unit_envelope(response).await
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("请求失败: {}", e))?;

    if response.status() == 401 {
        return Err("未登录或登录已过期".to_string());
    }

    check_unit_envelope(response).await
}

// `data` у пустых ответов сериализуется как null, поэтому конверт
// разбирается в Value и проверяется только код
async fn check_unit_envelope(response: gloo_net::http::Response) -> Result<(), String> {
    let envelope = response
        .json::<ApiEnvelope<serde_json::Value>>()
        .await
        .map_err(|e| format!("响应解析失败: {}", e))?;

    if envelope.is_ok() {
        Ok(())
    } else {
        Err(envelope.msg)
    }
}
