use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The singleton toggle pair: show ratings publicly / accept new ratings.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    pub show_ratings: bool,
    pub allow_ratings: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Latest settings row, or `None` before the store was ever seeded.
    async fn get_latest(&self) -> Result<Option<SettingsView>, SettingsRepositoryError>;

    /// Write the full toggle pair with a fresh `updated_at`, creating the
    /// singleton row if it does not exist yet.
    async fn upsert(
        &self,
        show_ratings: bool,
        allow_ratings: bool,
    ) -> Result<SettingsView, SettingsRepositoryError>;
}
