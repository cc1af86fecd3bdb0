use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A stored rating. Immutable once created; there is no update path.
#[derive(Debug, Clone, Serialize)]
pub struct RatingRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub professional_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewRating {
    pub user_id: Uuid,
    pub professional_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RatingRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Professional not found")]
    ProfessionalNotFound,
}

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Insert the rating and fold it into the professional's denormalized
    /// `(total_ratings, average_rating)` pair. The read-modify-write of the
    /// aggregates runs under a transaction with the professional row locked,
    /// so concurrent ratings of the same professional serialize and no
    /// update is lost.
    async fn add_rating(&self, data: NewRating) -> Result<RatingRecord, RatingRepositoryError>;

    /// Rating history for a professional, newest first.
    async fn ratings_for_professional(
        &self,
        professional_id: Uuid,
    ) -> Result<Vec<RatingRecord>, RatingRepositoryError>;
}
