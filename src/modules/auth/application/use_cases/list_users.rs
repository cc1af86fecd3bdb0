use async_trait::async_trait;

use crate::auth::application::ports::outgoing::{UserQuery, UserView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<UserView>, ListUsersError>;
}

#[derive(Clone)]
pub struct ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    users: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(users: Q) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<UserView>, ListUsersError> {
        let users = self
            .users
            .list()
            .await
            .map_err(|e| ListUsersError::QueryError(e.to_string()))?;

        Ok(users.iter().map(|u| u.view()).collect())
    }
}
