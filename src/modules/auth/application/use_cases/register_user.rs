use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, SessionStore, UserQuery, UserRepository, UserRepositoryError,
};
use crate::auth::application::use_cases::login_user::AuthenticatedSession;

//
// ──────────────────────────────────────────────────────────
// Register Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterCommand {
    username: String,
    password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username too long")]
    UsernameTooLong,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl RegisterCommand {
    pub fn new(username: String, password: String) -> Result<Self, RegisterCommandError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(RegisterCommandError::EmptyUsername);
        }

        if username.len() > 50 {
            return Err(RegisterCommandError::UsernameTooLong);
        }

        if password.is_empty() {
            return Err(RegisterCommandError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterCommand)
        -> Result<AuthenticatedSession, RegisterError>;
}

/// Self-service registration always produces a plain user; roles are only
/// granted through the super-admin user management surface.
#[derive(Clone)]
pub struct RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    users: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    sessions: Arc<dyn SessionStore + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        users: Q,
        repository: R,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        sessions: Arc<dyn SessionStore + Send + Sync>,
    ) -> Self {
        Self {
            users,
            repository,
            hasher,
            sessions,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterCommand,
    ) -> Result<AuthenticatedSession, RegisterError> {
        let existing = self
            .users
            .by_username(command.username())
            .await
            .map_err(|e| RegisterError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Err(RegisterError::UsernameTaken);
        }

        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create(CreateUserData {
                username: command.username().to_string(),
                password_hash,
                is_admin: false,
                is_super_admin: false,
            })
            .await
            .map_err(|e| match e {
                // Lost the race against a concurrent registration
                UserRepositoryError::UsernameTaken => RegisterError::UsernameTaken,
                other => RegisterError::RepositoryError(other.to_string()),
            })?;

        let session_id = self
            .sessions
            .open(user.id)
            .await
            .map_err(|e| RegisterError::SessionError(e.to_string()))?;

        Ok(AuthenticatedSession {
            session_id,
            user: user.view(),
        })
    }
}
