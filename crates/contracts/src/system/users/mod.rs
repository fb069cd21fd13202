use serde::{Deserialize, Serialize};

/// Учётная запись без пароля, хэш хранится только на сервере
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    pub fn to_user_info(&self) -> super::auth::UserInfo {
        super::auth::UserInfo {
            id: self.id.clone(),
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            is_admin: self.is_admin,
        }
    }
}
