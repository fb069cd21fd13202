use contracts::shared::ApiEnvelope;
use contracts::system::auth::{LoginRequest, LoginResponse, RefreshRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&format!("{}/api/system/auth/login", api_base()))
        .json(&request)
        .map_err(|e| format!("请求序列化失败: {}", e))?
        .send()
        .await
        .map_err(|e| format!("请求失败: {}", e))?;

    response
        .json::<ApiEnvelope<LoginResponse>>()
        .await
        .map_err(|e| format!("响应解析失败: {}", e))?
        .into_result()
}

pub async fn logout(refresh_token: String) -> Result<(), String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&format!("{}/api/system/auth/logout", api_base()))
        .json(&request)
        .map_err(|e| format!("请求序列化失败: {}", e))?
        .send()
        .await
        .map_err(|e| format!("请求失败: {}", e))?;

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

