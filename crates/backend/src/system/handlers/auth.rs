use axum::extract::Json;
use contracts::shared::ApiEnvelope;
use contracts::system::auth::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo};

use crate::system::auth::extractor::CurrentUser;
use crate::system::{auth::jwt, users::service as user_service};

/// POST /api/system/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> Json<ApiEnvelope<LoginResponse>> {
    let user = match user_service::verify_credentials(&request.username, &request.password).await {
        Ok(Some(user)) => user,
        Ok(None) => return Json(ApiEnvelope::err(401, "用户名或密码错误")),
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            return Json(ApiEnvelope::err(500, "登录失败"));
        }
    };

    let access_token = match jwt::generate_access_token(&user.id, &user.username, user.is_admin).await
    {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Token generation failed: {}", e);
            return Json(ApiEnvelope::err(500, "登录失败"));
        }
    };

    let refresh_token = jwt::generate_refresh_token();
    if let Err(e) = store_refresh_token(&user.id, &refresh_token).await {
        tracing::error!("Failed to store refresh token: {}", e);
        return Json(ApiEnvelope::err(500, "登录失败"));
    }

    Json(ApiEnvelope::ok(LoginResponse {
        access_token,
        refresh_token,
        user: user.to_user_info(),
    }))
}

/// POST /api/system/auth/refresh
pub async fn refresh(Json(request): Json<RefreshRequest>) -> Json<ApiEnvelope<RefreshResponse>> {
    let user_id = match validate_refresh_token(&request.refresh_token).await {
        Ok(id) => id,
        Err(_) => return Json(ApiEnvelope::err(401, "刷新令牌无效或已过期")),
    };

    let user = match user_service::get_by_id(&user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return Json(ApiEnvelope::err(401, "用户不存在")),
        Err(e) => {
            tracing::error!("Refresh failed: {}", e);
            return Json(ApiEnvelope::err(500, "刷新失败"));
        }
    };

    match jwt::generate_access_token(&user.id, &user.username, user.is_admin).await {
        Ok(access_token) => Json(ApiEnvelope::ok(RefreshResponse { access_token })),
        Err(e) => {
            tracing::error!("Token generation failed: {}", e);
            Json(ApiEnvelope::err(500, "刷新失败"))
        }
    }
}

/// POST /api/system/auth/logout
pub async fn logout(Json(request): Json<RefreshRequest>) -> Json<ApiEnvelope<()>> {
    match revoke_refresh_token(&request.refresh_token).await {
        Ok(()) => Json(ApiEnvelope::ok(())),
        Err(e) => {
            tracing::error!("Logout failed: {}", e);
            Json(ApiEnvelope::err(500, "退出登录失败"))
        }
    }
}

/// GET /api/system/auth/me (под require_auth)
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Json<ApiEnvelope<UserInfo>> {
    match user_service::get_by_id(&claims.sub).await {
        Ok(Some(user)) => Json(ApiEnvelope::ok(user.to_user_info())),
        Ok(None) => Json(ApiEnvelope::err(404, "用户不存在")),
        Err(e) => {
            tracing::error!("Failed to load current user: {}", e);
            Json(ApiEnvelope::err(500, "获取用户信息失败"))
        }
    }
}

// В базе хранится только sha256-хэш refresh-токена

async fn store_refresh_token(user_id: &str, token: &str) -> anyhow::Result<()> {
    use crate::shared::data::db::get_connection;
    use chrono::Utc;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let token_hash = hash_token(token);
    let expires_at = jwt::calculate_refresh_token_expiration();
    let created_at = Utc::now().to_rfc3339();

    let conn = get_connection();
    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_refresh_token (token_hash, user_id, expires_at, created_at)
         VALUES (?, ?, ?, ?)",
        [
            token_hash.into(),
            user_id.to_string().into(),
            expires_at.into(),
            created_at.into(),
        ],
    ))
    .await?;

    Ok(())
}

async fn validate_refresh_token(token: &str) -> anyhow::Result<String> {
    use crate::shared::data::db::get_connection;
    use chrono::Utc;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let token_hash = hash_token(token);
    let now = Utc::now().to_rfc3339();

    let conn = get_connection();
    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id FROM sys_refresh_token
             WHERE token_hash = ? AND expires_at > ?",
            [token_hash.into(), now.into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let user_id: String = row.try_get("", "user_id")?;
            Ok(user_id)
        }
        None => Err(anyhow::anyhow!("Invalid or expired refresh token")),
    }
}

async fn revoke_refresh_token(token: &str) -> anyhow::Result<()> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let token_hash = hash_token(token);

    let conn = get_connection();
    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "DELETE FROM sys_refresh_token WHERE token_hash = ?",
        [token_hash.into()],
    ))
    .await?;

    Ok(())
}

fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
