use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError, UserView,
};

//
// ──────────────────────────────────────────────────────────
// Create User Command (super-admin surface)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    username: String,
    password: String,
    role: Role,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateUserCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username too long")]
    UsernameTooLong,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Unknown role")]
    InvalidRole,
}

impl CreateUserCommand {
    pub fn new(
        username: String,
        password: String,
        role: &str,
    ) -> Result<Self, CreateUserCommandError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(CreateUserCommandError::EmptyUsername);
        }

        if username.len() > 50 {
            return Err(CreateUserCommandError::UsernameTooLong);
        }

        if password.is_empty() {
            return Err(CreateUserCommandError::EmptyPassword);
        }

        let role = Role::parse(role).ok_or(CreateUserCommandError::InvalidRole)?;

        Ok(Self {
            username: username.to_string(),
            password,
            role,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<UserView, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    users: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(users: Q, repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            users,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> CreateUserUseCase for CreateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<UserView, CreateUserError> {
        let existing = self
            .users
            .by_username(command.username())
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Err(CreateUserError::UsernameTaken);
        }

        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create(CreateUserData {
                username: command.username().to_string(),
                password_hash,
                is_admin: command.role().is_admin(),
                is_super_admin: command.role().is_super_admin(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameTaken => CreateUserError::UsernameTaken,
                other => CreateUserError::RepositoryError(other.to_string()),
            })?;

        Ok(user.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::auth::application::ports::outgoing::{
        HashError, UserFieldUpdate, UserQueryError, UserRecord,
    };

    struct MockUserQuery;

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn by_id(&self, _id: Uuid) -> Result<Option<UserRecord>, UserQueryError> {
            unimplemented!()
        }

        async fn by_username(&self, _username: &str) -> Result<Option<UserRecord>, UserQueryError> {
            Ok(None)
        }

        async fn list(&self) -> Result<Vec<UserRecord>, UserQueryError> {
            unimplemented!()
        }
    }

    struct MockUserRepository;

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create(&self, data: CreateUserData) -> Result<UserRecord, UserRepositoryError> {
            Ok(UserRecord {
                id: Uuid::new_v4(),
                username: data.username,
                password_hash: data.password_hash,
                is_admin: data.is_admin,
                is_super_admin: data.is_super_admin,
            })
        }

        async fn update_role(
            &self,
            _id: Uuid,
            _is_admin: bool,
            _is_super_admin: bool,
        ) -> Result<UserRecord, UserRepositoryError> {
            unimplemented!()
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

    struct MockHasher;

    #[async_trait]
    impl PasswordHasher for MockHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{password}"))
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn superadmin_role_sets_both_flags() {
        let service = CreateUserService::new(MockUserQuery, MockUserRepository, Arc::new(MockHasher));

        let command =
            CreateUserCommand::new("root".to_string(), "secret".to_string(), "superadmin").unwrap();
        let user = service.execute(command).await.unwrap();

        assert!(user.is_admin);
        assert!(user.is_super_admin);
    }

    #[tokio::test]
    async fn admin_role_sets_only_admin_flag() {
        let service = CreateUserService::new(MockUserQuery, MockUserRepository, Arc::new(MockHasher));

        let command =
            CreateUserCommand::new("mod".to_string(), "secret".to_string(), "admin").unwrap();
        let user = service.execute(command).await.unwrap();

        assert!(user.is_admin);
        assert!(!user.is_super_admin);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result = CreateUserCommand::new("x".to_string(), "secret".to_string(), "root");
        assert!(matches!(result, Err(CreateUserCommandError::InvalidRole)));
    }
}
