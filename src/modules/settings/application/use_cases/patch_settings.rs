use async_trait::async_trait;

use crate::settings::application::ports::outgoing::{SettingsRepository, SettingsView};

/// Caller-supplied toggles; `None` preserves the stored value.
#[derive(Debug, Clone, Default)]
pub struct PatchSettingsCommand {
    pub show_ratings: Option<bool>,
    pub allow_ratings: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchSettingsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Merge-upsert: supplied fields land over the last-known row, omitted ones
/// are preserved, and `updated_at` is always restamped. An empty patch is
/// a pure touch.
#[async_trait]
pub trait PatchSettingsUseCase: Send + Sync {
    async fn execute(&self, command: PatchSettingsCommand)
        -> Result<SettingsView, PatchSettingsError>;
}

#[derive(Debug, Clone)]
pub struct PatchSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    repository: R,
}

impl<R> PatchSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchSettingsUseCase for PatchSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: PatchSettingsCommand,
    ) -> Result<SettingsView, PatchSettingsError> {
        let map_err =
            |e: crate::settings::application::ports::outgoing::SettingsRepositoryError| {
                PatchSettingsError::RepositoryError(e.to_string())
            };

        let current = self.repository.get_latest().await.map_err(map_err)?;

        let (show_ratings, allow_ratings) = match current {
            Some(settings) => (
                command.show_ratings.unwrap_or(settings.show_ratings),
                command.allow_ratings.unwrap_or(settings.allow_ratings),
            ),
            None => (
                command.show_ratings.unwrap_or(true),
                command.allow_ratings.unwrap_or(true),
            ),
        };

        self.repository
            .upsert(show_ratings, allow_ratings)
            .await
            .map_err(map_err)
    }
}
