use std::sync::Arc;

use crate::recommendation::application::use_cases::{
    get_recommendations::GetRecommendationsUseCase,
    refresh_recommendations::RefreshRecommendationsUseCase,
};

#[derive(Clone)]
pub struct RecommendationUseCases {
    pub get: Arc<dyn GetRecommendationsUseCase + Send + Sync>,
    pub refresh: Arc<dyn RefreshRecommendationsUseCase + Send + Sync>,
}
