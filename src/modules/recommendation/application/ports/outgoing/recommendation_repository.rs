use async_trait::async_trait;
use uuid::Uuid;

use crate::professional::application::ports::outgoing::ProfessionalView;

/// One cached recommendation row: `score` is the professional's average
/// rating at the time the set was computed.
#[derive(Debug, Clone)]
pub struct RecommendationEntry {
    pub professional_id: Uuid,
    pub score: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecommendationRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    async fn count_user_ratings(
        &self,
        user_id: Uuid,
    ) -> Result<u64, RecommendationRepositoryError>;

    /// Globally top-rated professionals, descending average; ties fall
    /// wherever the store returns them.
    async fn top_rated(
        &self,
        limit: u64,
    ) -> Result<Vec<ProfessionalView>, RecommendationRepositoryError>;

    /// Professionals sharing an occupation with any professional this user
    /// rated 4 or better, descending average.
    async fn liked_occupation_matches(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<ProfessionalView>, RecommendationRepositoryError>;

    /// Delete-then-insert replacement of the user's cached rows. NOT
    /// transactional: a concurrent reader may observe the set half-built,
    /// which is acceptable for advisory data.
    async fn replace_for_user(
        &self,
        user_id: Uuid,
        entries: Vec<RecommendationEntry>,
    ) -> Result<(), RecommendationRepositoryError>;
}
