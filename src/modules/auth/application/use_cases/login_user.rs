use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    PasswordHasher, SessionStore, UserQuery, UserView,
};

//
// ──────────────────────────────────────────────────────────
// Login Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginCommand {
    username: String,
    password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginCommand {
    pub fn new(username: String, password: String) -> Result<Self, LoginCommandError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(LoginCommandError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginCommandError::EmptyPassword);
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
// Use Case Error / Result
// ──────────────────────────────────────────────────────────
//

/// Session opened for a successfully authenticated user. The route turns
/// `session_id` into the `sid` cookie; only `user` is serialized.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub session_id: String,
    pub user: UserView,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown username and wrong password are indistinguishable to callers.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<AuthenticatedSession, LoginError>;
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    users: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    sessions: Arc<dyn SessionStore + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        users: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        sessions: Arc<dyn SessionStore + Send + Sync>,
    ) -> Self {
        Self {
            users,
            hasher,
            sessions,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<AuthenticatedSession, LoginError> {
        let user = self
            .users
            .by_username(command.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let valid = self
            .hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::VerificationFailed(e.to_string()))?;

        if !valid {
            return Err(LoginError::InvalidCredentials);
        }

        let session_id = self
            .sessions
            .open(user.id)
            .await
            .map_err(|e| LoginError::SessionError(e.to_string()))?;

        Ok(AuthenticatedSession {
            session_id,
            user: user.view(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::auth::application::ports::outgoing::{
        HashError, SessionStoreError, UserQueryError, UserRecord,
    };

    // ──────────────────────────────────────────────────────────
    // Mocks
    // ──────────────────────────────────────────────────────────

    struct MockUserQuery {
        user: Option<UserRecord>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn by_id(&self, _id: Uuid) -> Result<Option<UserRecord>, UserQueryError> {
            unimplemented!()
        }

        async fn by_username(&self, _username: &str) -> Result<Option<UserRecord>, UserQueryError> {
            Ok(self.user.clone())
        }

        async fn list(&self) -> Result<Vec<UserRecord>, UserQueryError> {
            unimplemented!()
        }
    }

    struct MockHasher {
        matches: bool,
    }

    #[async_trait]
    impl PasswordHasher for MockHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            unimplemented!()
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(self.matches)
        }
    }

    struct MockSessionStore;

    #[async_trait]
    impl SessionStore for MockSessionStore {
        async fn open(&self, _user_id: Uuid) -> Result<String, SessionStoreError> {
            Ok("session-1".to_string())
        }

        async fn resolve(&self, _session_id: &str) -> Result<Option<Uuid>, SessionStoreError> {
            unimplemented!()
        }

        async fn close(&self, _session_id: &str) -> Result<(), SessionStoreError> {
            Ok(())
        }
    }

    fn sample_user() -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            username: "maria".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            is_admin: false,
            is_super_admin: false,
        }
    }

    fn command() -> LoginCommand {
        LoginCommand::new("maria".to_string(), "secret".to_string()).unwrap()
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn login_success_opens_session() {
        let user = sample_user();
        let service = LoginUserService::new(
            MockUserQuery {
                user: Some(user.clone()),
            },
            Arc::new(MockHasher { matches: true }),
            Arc::new(MockSessionStore),
        );

        let session = service.execute(command()).await.unwrap();

        assert_eq!(session.session_id, "session-1");
        assert_eq!(session.user.id, user.id);
        assert_eq!(session.user.username, "maria");
    }

    #[tokio::test]
    async fn unknown_username_is_invalid_credentials() {
        let service = LoginUserService::new(
            MockUserQuery { user: None },
            Arc::new(MockHasher { matches: true }),
            Arc::new(MockSessionStore),
        );

        let result = service.execute(command()).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let service = LoginUserService::new(
            MockUserQuery {
                user: Some(sample_user()),
            },
            Arc::new(MockHasher { matches: false }),
            Arc::new(MockSessionStore),
        );

        let result = service.execute(command()).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[test]
    fn command_rejects_blank_username() {
        let result = LoginCommand::new("   ".to_string(), "secret".to_string());
        assert!(matches!(result, Err(LoginCommandError::EmptyUsername)));
    }
}
