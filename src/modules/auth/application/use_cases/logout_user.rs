use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::SessionStore;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Session error: {0}")]
    SessionError(String),
}

#[async_trait]
pub trait LogoutUserUseCase: Send + Sync {
    /// Closing an already-closed or unknown session succeeds.
    async fn execute(&self, session_id: &str) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUserService {
    sessions: Arc<dyn SessionStore + Send + Sync>,
}

impl LogoutUserService {
    pub fn new(sessions: Arc<dyn SessionStore + Send + Sync>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl LogoutUserUseCase for LogoutUserService {
    async fn execute(&self, session_id: &str) -> Result<(), LogoutError> {
        self.sessions
            .close(session_id)
            .await
            .map_err(|e| LogoutError::SessionError(e.to_string()))
    }
}
