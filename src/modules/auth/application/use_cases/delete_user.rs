use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteUserError>;
}

#[derive(Clone)]
pub struct DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteUserUseCase for DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteUserError> {
        self.repository.delete(id).await.map_err(|e| match e {
            UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
            other => DeleteUserError::RepositoryError(other.to_string()),
        })
    }
}
