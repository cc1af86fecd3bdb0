use async_trait::async_trait;
use uuid::Uuid;

use crate::rating::application::ports::outgoing::{RatingRecord, RatingRepository};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfessionalRatingsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// History for a professional, newest first. An unknown professional yields
/// an empty list, same as one that was never rated.
#[async_trait]
pub trait GetProfessionalRatingsUseCase: Send + Sync {
    async fn execute(
        &self,
        professional_id: Uuid,
    ) -> Result<Vec<RatingRecord>, GetProfessionalRatingsError>;
}

#[derive(Debug, Clone)]
pub struct GetProfessionalRatingsService<R>
where
    R: RatingRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetProfessionalRatingsService<R>
where
    R: RatingRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProfessionalRatingsUseCase for GetProfessionalRatingsService<R>
where
    R: RatingRepository + Send + Sync,
{
    async fn execute(
        &self,
        professional_id: Uuid,
    ) -> Result<Vec<RatingRecord>, GetProfessionalRatingsError> {
        self.repository
            .ratings_for_professional(professional_id)
            .await
            .map_err(|e| GetProfessionalRatingsError::QueryError(e.to_string()))
    }
}
