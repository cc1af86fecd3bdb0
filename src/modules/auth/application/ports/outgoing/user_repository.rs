use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::UserRecord;

// Input DTO for creating a user with explicit role flags
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub is_super_admin: bool,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserFieldUpdate {
    pub username: Option<String>,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Username already exists")]
    UsernameTaken,

    #[error("User not found")]
    UserNotFound,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, data: CreateUserData) -> Result<UserRecord, UserRepositoryError>;

    async fn update_role(
        &self,
        id: Uuid,
        is_admin: bool,
        is_super_admin: bool,
    ) -> Result<UserRecord, UserRepositoryError>;

    async fn update_fields(
        &self,
        id: Uuid,
        update: UserFieldUpdate,
    ) -> Result<UserRecord, UserRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), UserRepositoryError>;
}
