use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A listing as served to clients. `average_rating` and `total_ratings` are
/// denormalized aggregates owned by the rating path; nothing else writes
/// them.
#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalView {
    pub id: Uuid,
    pub name: String,
    pub occupation: String,
    pub description: String,
    pub photo_url: String,
    pub whatsapp: String,
    pub detailed_description: String,
    pub location: String,
    pub average_rating: i32,
    pub total_ratings: i32,
    pub category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfessionalQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Professional not found")]
    NotFound,
}

#[async_trait]
pub trait ProfessionalQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<ProfessionalView>, ProfessionalQueryError>;

    async fn by_id(&self, id: Uuid) -> Result<ProfessionalView, ProfessionalQueryError>;
}
