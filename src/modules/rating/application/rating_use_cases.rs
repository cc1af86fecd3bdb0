use std::sync::Arc;

use crate::rating::application::use_cases::{
    get_professional_ratings::GetProfessionalRatingsUseCase,
    rate_professional::RateProfessionalUseCase,
};

#[derive(Clone)]
pub struct RatingUseCases {
    pub rate: Arc<dyn RateProfessionalUseCase + Send + Sync>,
    pub list_for_professional: Arc<dyn GetProfessionalRatingsUseCase + Send + Sync>,
}
