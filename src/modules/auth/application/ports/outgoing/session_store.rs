use async_trait::async_trait;
use uuid::Uuid;

/// Session lifetime in seconds (24h per spec); doubles as the Redis TTL.
pub const SESSION_TTL_SECS: u64 = 86_400;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Open a new session for `user_id`, returning the opaque session id.
    async fn open(&self, user_id: Uuid) -> Result<String, SessionStoreError>;

    /// Resolve a session id to its user id, or `None` if it does not exist.
    async fn resolve(&self, session_id: &str) -> Result<Option<Uuid>, SessionStoreError>;

    /// Close (delete) a session; closing an unknown session is a no-op.
    async fn close(&self, session_id: &str) -> Result<(), SessionStoreError>;
}
