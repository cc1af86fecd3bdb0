use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    SessionStore, SessionStoreError, UserQuery, UserQueryError, UserRecord,
};

/// Cookie header matching the stub session below.
pub fn session_header() -> (&'static str, &'static str) {
    ("Cookie", "sid=test-session")
}

pub fn user_record(username: &str, is_admin: bool, is_super_admin: bool) -> UserRecord {
    UserRecord {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password_hash: "$argon2id$stub".to_string(),
        is_admin,
        is_super_admin,
    }
}

/// Resolves every session id to the configured user (or to nothing).
struct StubSessionStore {
    user_id: Option<Uuid>,
}

#[async_trait]
impl SessionStore for StubSessionStore {
    async fn open(&self, _user_id: Uuid) -> Result<String, SessionStoreError> {
        Ok("test-session".to_string())
    }

    async fn resolve(&self, _session_id: &str) -> Result<Option<Uuid>, SessionStoreError> {
        Ok(self.user_id)
    }

    async fn close(&self, _session_id: &str) -> Result<(), SessionStoreError> {
        Ok(())
    }
}

struct StubUserQuery {
    user: Option<UserRecord>,
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn by_id(&self, _id: Uuid) -> Result<Option<UserRecord>, UserQueryError> {
        Ok(self.user.clone())
    }

    async fn by_username(&self, _username: &str) -> Result<Option<UserRecord>, UserQueryError> {
        Ok(self.user.clone())
    }

    async fn list(&self) -> Result<Vec<UserRecord>, UserQueryError> {
        Ok(self.user.clone().into_iter().collect())
    }
}

type AuthAppData = (
    web::Data<Arc<dyn SessionStore + Send + Sync>>,
    web::Data<Arc<dyn UserQuery + Send + Sync>>,
);

/// app_data pair the session extractors need, resolving the `sid` cookie to
/// the given user.
pub fn logged_in_auth_data(user: &UserRecord) -> AuthAppData {
    let sessions: Arc<dyn SessionStore + Send + Sync> = Arc::new(StubSessionStore {
        user_id: Some(user.id),
    });
    let users: Arc<dyn UserQuery + Send + Sync> = Arc::new(StubUserQuery {
        user: Some(user.clone()),
    });

    (web::Data::new(sessions), web::Data::new(users))
}

/// Same pair, but no session resolves and no user exists.
pub fn anonymous_auth_data() -> AuthAppData {
    let sessions: Arc<dyn SessionStore + Send + Sync> =
        Arc::new(StubSessionStore { user_id: None });
    let users: Arc<dyn UserQuery + Send + Sync> = Arc::new(StubUserQuery { user: None });

    (web::Data::new(sessions), web::Data::new(users))
}
