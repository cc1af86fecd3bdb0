use async_trait::async_trait;
use chrono::Utc;

use crate::settings::application::ports::outgoing::{
    SettingsRepository, SettingsView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSettingsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<SettingsView, GetSettingsError>;
}

#[derive(Debug, Clone)]
pub struct GetSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSettingsUseCase for GetSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<SettingsView, GetSettingsError> {
        let latest = self
            .repository
            .get_latest()
            .await
            .map_err(|e| GetSettingsError::RepositoryError(e.to_string()))?;

        // The migration seeds the singleton, so this default only covers a
        // store that predates it
        Ok(latest.unwrap_or(SettingsView {
            show_ratings: true,
            allow_ratings: true,
            updated_at: Utc::now(),
        }))
    }
}
