mod recommendation_repository;

pub use recommendation_repository::{
    RecommendationEntry, RecommendationRepository, RecommendationRepositoryError,
};
