use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::recommendation::application::ports::outgoing::{
    RecommendationEntry, RecommendationRepository,
};
use crate::recommendation::application::use_cases::get_recommendations::RECOMMENDATION_LIMIT;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshRecommendationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Call-and-replace: recompute the user's suggestion set and swap out the
/// cached rows, scoring each entry with the professional's current average.
#[async_trait]
pub trait RefreshRecommendationsUseCase: Send + Sync {
    async fn execute(&self, user: UserId) -> Result<(), RefreshRecommendationsError>;
}

#[derive(Debug, Clone)]
pub struct RefreshRecommendationsService<R>
where
    R: RecommendationRepository + Send + Sync,
{
    repository: R,
}

impl<R> RefreshRecommendationsService<R>
where
    R: RecommendationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RefreshRecommendationsUseCase for RefreshRecommendationsService<R>
where
    R: RecommendationRepository + Send + Sync,
{
    async fn execute(&self, user: UserId) -> Result<(), RefreshRecommendationsError> {
        let map_err = |e: crate::recommendation::application::ports::outgoing::RecommendationRepositoryError| {
            RefreshRecommendationsError::RepositoryError(e.to_string())
        };

        let rated = self
            .repository
            .count_user_ratings(user.value())
            .await
            .map_err(map_err)?;

        let suggestions = if rated == 0 {
            self.repository.top_rated(RECOMMENDATION_LIMIT).await
        } else {
            self.repository
                .liked_occupation_matches(user.value(), RECOMMENDATION_LIMIT)
                .await
        }
        .map_err(map_err)?;

        let entries = suggestions
            .iter()
            .map(|p| RecommendationEntry {
                professional_id: p.id,
                score: p.average_rating,
            })
            .collect();

        self.repository
            .replace_for_user(user.value(), entries)
            .await
            .map_err(map_err)
    }
}
