use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    SessionStore, SessionStoreError, SESSION_TTL_SECS,
};

/// Redis-backed implementation of `SessionStore`.
///
/// ## Redis data model
///
/// One key per live session:
/// ```text
/// auth:session:{session_id} -> "{user_id}"
/// ```
/// - TTL = 24h, refreshed never; a session simply ages out
/// - Redis TTL is the single source of truth for expiry; nothing is swept
///   manually
///
/// The session id is an opaque UUID minted server-side; the browser only
/// ever sees it inside the `sid` cookie.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Arc<Pool>,
}

impl RedisSessionStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn session_key(session_id: &str) -> String {
        format!("auth:session:{session_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionStoreError::StoreError(format!("Pool error: {e}")))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn open(&self, user_id: Uuid) -> Result<String, SessionStoreError> {
        let session_id = Uuid::new_v4().to_string();
        let mut conn = self.get_conn().await?;

        let _: () = conn
            .set_ex(
                Self::session_key(&session_id),
                user_id.to_string(),
                SESSION_TTL_SECS,
            )
            .await
            .map_err(|e| SessionStoreError::StoreError(e.to_string()))?;

        Ok(session_id)
    }

    async fn resolve(&self, session_id: &str) -> Result<Option<Uuid>, SessionStoreError> {
        let mut conn = self.get_conn().await?;

        let raw: Option<String> = conn
            .get(Self::session_key(session_id))
            .await
            .map_err(|e| SessionStoreError::StoreError(e.to_string()))?;

        match raw {
            None => Ok(None),
            Some(value) => value
                .parse::<Uuid>()
                .map(Some)
                .map_err(|_| SessionStoreError::StoreError("Corrupt session record".to_string())),
        }
    }

    async fn close(&self, session_id: &str) -> Result<(), SessionStoreError> {
        let mut conn = self.get_conn().await?;

        // DEL on a missing key is a no-op, which makes logout idempotent
        let _: u64 = conn
            .del(Self::session_key(session_id))
            .await
            .map_err(|e| SessionStoreError::StoreError(e.to_string()))?;

        Ok(())
    }
}
