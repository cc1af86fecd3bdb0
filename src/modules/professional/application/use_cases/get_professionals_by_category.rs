use async_trait::async_trait;
use uuid::Uuid;

use crate::professional::application::ports::outgoing::{
    ProfessionalCategoryRepository, ProfessionalView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfessionalsByCategoryError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetProfessionalsByCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        category_id: Uuid,
    ) -> Result<Vec<ProfessionalView>, GetProfessionalsByCategoryError>;
}

#[derive(Debug, Clone)]
pub struct GetProfessionalsByCategoryService<R>
where
    R: ProfessionalCategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetProfessionalsByCategoryService<R>
where
    R: ProfessionalCategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProfessionalsByCategoryUseCase for GetProfessionalsByCategoryService<R>
where
    R: ProfessionalCategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        category_id: Uuid,
    ) -> Result<Vec<ProfessionalView>, GetProfessionalsByCategoryError> {
        self.repository
            .professionals_in(category_id)
            .await
            .map_err(|e| GetProfessionalsByCategoryError::QueryError(e.to_string()))
    }
}
