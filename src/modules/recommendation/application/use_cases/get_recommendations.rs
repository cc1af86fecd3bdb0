use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::professional::application::ports::outgoing::ProfessionalView;
use crate::recommendation::application::ports::outgoing::RecommendationRepository;

/// The suggestion set is always capped at five entries.
pub const RECOMMENDATION_LIMIT: u64 = 5;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRecommendationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Cold start (no ratings yet): the five highest-average professionals.
/// Otherwise: professionals sharing an occupation with ones the user rated
/// ≥ 4, descending average.
#[async_trait]
pub trait GetRecommendationsUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
    ) -> Result<Vec<ProfessionalView>, GetRecommendationsError>;
}

#[derive(Debug, Clone)]
pub struct GetRecommendationsService<R>
where
    R: RecommendationRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetRecommendationsService<R>
where
    R: RecommendationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetRecommendationsUseCase for GetRecommendationsService<R>
where
    R: RecommendationRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
    ) -> Result<Vec<ProfessionalView>, GetRecommendationsError> {
        let rated = self
            .repository
            .count_user_ratings(user.value())
            .await
            .map_err(|e| GetRecommendationsError::RepositoryError(e.to_string()))?;

        let suggestions = if rated == 0 {
            self.repository.top_rated(RECOMMENDATION_LIMIT).await
        } else {
            self.repository
                .liked_occupation_matches(user.value(), RECOMMENDATION_LIMIT)
                .await
        }
        .map_err(|e| GetRecommendationsError::RepositoryError(e.to_string()))?;

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::professional_view;
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::recommendation::application::ports::outgoing::{
        RecommendationEntry, RecommendationRepositoryError,
    };

    #[derive(Debug, Clone)]
    struct MockRecommendationRepository {
        rated: u64,
        top: Vec<ProfessionalView>,
        matches: Vec<ProfessionalView>,
    }

    #[async_trait]
    impl RecommendationRepository for MockRecommendationRepository {
        async fn count_user_ratings(
            &self,
            _user_id: Uuid,
        ) -> Result<u64, RecommendationRepositoryError> {
            Ok(self.rated)
        }

        async fn top_rated(
            &self,
            limit: u64,
        ) -> Result<Vec<ProfessionalView>, RecommendationRepositoryError> {
            Ok(self.top.iter().take(limit as usize).cloned().collect())
        }

        async fn liked_occupation_matches(
            &self,
            _user_id: Uuid,
            limit: u64,
        ) -> Result<Vec<ProfessionalView>, RecommendationRepositoryError> {
            Ok(self.matches.iter().take(limit as usize).cloned().collect())
        }

        async fn replace_for_user(
            &self,
            _user_id: Uuid,
            _entries: Vec<RecommendationEntry>,
        ) -> Result<(), RecommendationRepositoryError> {
            unimplemented!()
        }
    }

    fn ranked_professionals(count: usize) -> Vec<ProfessionalView> {
        (0..count)
            .map(|i| professional_view(&format!("pro-{i}"), "Plomero", 5 - (i as i32).min(4)))
            .collect()
    }

    #[tokio::test]
    async fn cold_start_returns_at_most_five_top_rated() {
        let repo = MockRecommendationRepository {
            rated: 0,
            top: ranked_professionals(8),
            matches: vec![],
        };
        let service = GetRecommendationsService::new(repo);

        let suggestions = service.execute(UserId::from(Uuid::new_v4())).await.unwrap();

        assert_eq!(suggestions.len(), 5);
        // Descending by average rating
        for pair in suggestions.windows(2) {
            assert!(pair[0].average_rating >= pair[1].average_rating);
        }
    }

    #[tokio::test]
    async fn raters_get_occupation_matches_instead() {
        let matches = vec![
            professional_view("match-a", "Electricista", 5),
            professional_view("match-b", "Electricista", 3),
        ];

        let repo = MockRecommendationRepository {
            rated: 3,
            top: ranked_professionals(5),
            matches: matches.clone(),
        };
        let service = GetRecommendationsService::new(repo);

        let suggestions = service.execute(UserId::from(Uuid::new_v4())).await.unwrap();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].name, "match-a");
    }
}
