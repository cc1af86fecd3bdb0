use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::outgoing::CategoryView;
use crate::professional::application::ports::outgoing::ProfessionalCategoryRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfessionalCategoriesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetProfessionalCategoriesUseCase: Send + Sync {
    async fn execute(
        &self,
        professional_id: Uuid,
    ) -> Result<Vec<CategoryView>, GetProfessionalCategoriesError>;
}

#[derive(Debug, Clone)]
pub struct GetProfessionalCategoriesService<R>
where
    R: ProfessionalCategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetProfessionalCategoriesService<R>
where
    R: ProfessionalCategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProfessionalCategoriesUseCase for GetProfessionalCategoriesService<R>
where
    R: ProfessionalCategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        professional_id: Uuid,
    ) -> Result<Vec<CategoryView>, GetProfessionalCategoriesError> {
        self.repository
            .categories_of(professional_id)
            .await
            .map_err(|e| GetProfessionalCategoriesError::QueryError(e.to_string()))
    }
}
