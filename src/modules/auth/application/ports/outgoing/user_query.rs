use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

/// Full user row as read from the store. Never serialized to clients.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub is_super_admin: bool,
}

/// Client-facing projection. The credential hash never leaves the backend.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
    pub is_super_admin: bool,
}

impl UserRecord {
    pub fn view(&self) -> UserView {
        UserView {
            id: self.id,
            username: self.username.clone(),
            is_admin: self.is_admin,
            is_super_admin: self.is_super_admin,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn by_id(&self, id: Uuid) -> Result<Option<UserRecord>, UserQueryError>;

    async fn by_username(&self, username: &str) -> Result<Option<UserRecord>, UserQueryError>;

    async fn list(&self) -> Result<Vec<UserRecord>, UserQueryError>;
}
