use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError, UserView};

#[derive(Debug, Clone)]
pub struct UpdateUserRoleCommand {
    target: Uuid,
    role: Role,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateUserRoleCommandError {
    #[error("Unknown role")]
    InvalidRole,
}

impl UpdateUserRoleCommand {
    /// The self-modification guard lives at the route, where the session
    /// identity is known; the command only validates the role string.
    pub fn new(target: Uuid, role: &str) -> Result<Self, UpdateUserRoleCommandError> {
        let role = Role::parse(role).ok_or(UpdateUserRoleCommandError::InvalidRole)?;
        Ok(Self { target, role })
    }

    pub fn target(&self) -> Uuid {
        self.target
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserRoleError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserRoleUseCase: Send + Sync {
    async fn execute(&self, command: UpdateUserRoleCommand)
        -> Result<UserView, UpdateUserRoleError>;
}

#[derive(Clone)]
pub struct UpdateUserRoleService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateUserRoleService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateUserRoleUseCase for UpdateUserRoleService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateUserRoleCommand,
    ) -> Result<UserView, UpdateUserRoleError> {
        let user = self
            .repository
            .update_role(
                command.target(),
                command.role().is_admin(),
                command.role().is_super_admin(),
            )
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserRoleError::UserNotFound,
                other => UpdateUserRoleError::RepositoryError(other.to_string()),
            })?;

        Ok(user.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::auth::application::ports::outgoing::{
        CreateUserData, UserFieldUpdate, UserRecord,
    };

    struct MockUserRepository {
        known: bool,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create(&self, _data: CreateUserData) -> Result<UserRecord, UserRepositoryError> {
            unimplemented!()
        }

        async fn update_role(
            &self,
            id: Uuid,
            is_admin: bool,
            is_super_admin: bool,
        ) -> Result<UserRecord, UserRepositoryError> {
            if !self.known {
                return Err(UserRepositoryError::UserNotFound);
            }
            Ok(UserRecord {
                id,
                username: "target".to_string(),
                password_hash: "hash".to_string(),
                is_admin,
                is_super_admin,
            })
        }

        async fn update_fields(
            &self,
            _id: Uuid,
            _update: UserFieldUpdate,
        ) -> Result<UserRecord, UserRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn demoting_to_user_clears_both_flags() {
        let service = UpdateUserRoleService::new(MockUserRepository { known: true });

        let command = UpdateUserRoleCommand::new(Uuid::new_v4(), "user").unwrap();
        let user = service.execute(command).await.unwrap();

        assert!(!user.is_admin);
        assert!(!user.is_super_admin);
    }

    #[tokio::test]
    async fn unknown_target_maps_to_not_found() {
        let service = UpdateUserRoleService::new(MockUserRepository { known: false });

        let command = UpdateUserRoleCommand::new(Uuid::new_v4(), "admin").unwrap();
        let result = service.execute(command).await;

        assert!(matches!(result, Err(UpdateUserRoleError::UserNotFound)));
    }
}
