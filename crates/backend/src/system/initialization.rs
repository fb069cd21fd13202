use anyhow::Result;
use chrono::Utc;
use contracts::system::users::User;

use crate::system::auth::password;
use crate::system::users::repository;

/// Создаёт администратора по умолчанию, если его ещё нет
pub async fn ensure_admin_user_exists() -> Result<()> {
    if repository::get_by_username("admin").await?.is_some() {
        return Ok(());
    }

    tracing::info!("No admin user found. Creating default admin user...");

    let now = Utc::now().to_rfc3339();
    let admin = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: "admin".to_string(),
        full_name: Some("系统管理员".to_string()),
        is_active: true,
        is_admin: true,
        created_at: now.clone(),
        updated_at: now,
    };

    let password_hash = password::hash_password("admin123")?;
    repository::create_with_password(&admin, &password_hash).await?;

    tracing::warn!("═══════════════════════════════════════════════");
    tracing::warn!("  Default admin user created!");
    tracing::warn!("  Username: admin");
    tracing::warn!("  Password: admin123");
    tracing::warn!("  PLEASE CHANGE THE PASSWORD IMMEDIATELY!");
    tracing::warn!("═══════════════════════════════════════════════");

    Ok(())
}
