use async_trait::async_trait;
use uuid::Uuid;

use crate::professional::application::ports::outgoing::{
    CategoryAssignment, ProfessionalCategoryRepository, ProfessionalCategoryRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssignCategoryError {
    #[error("Professional not found")]
    ProfessionalNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Assigning an already-assigned category succeeds (idempotent link).
#[async_trait]
pub trait AssignCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        professional_id: Uuid,
        category_id: Uuid,
    ) -> Result<CategoryAssignment, AssignCategoryError>;
}

#[derive(Debug, Clone)]
pub struct AssignCategoryService<R>
where
    R: ProfessionalCategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> AssignCategoryService<R>
where
    R: ProfessionalCategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AssignCategoryUseCase for AssignCategoryService<R>
where
    R: ProfessionalCategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        professional_id: Uuid,
        category_id: Uuid,
    ) -> Result<CategoryAssignment, AssignCategoryError> {
        self.repository
            .assign(professional_id, category_id)
            .await
            .map_err(|e| match e {
                ProfessionalCategoryRepositoryError::ProfessionalNotFound => {
                    AssignCategoryError::ProfessionalNotFound
                }
                ProfessionalCategoryRepositoryError::CategoryNotFound => {
                    AssignCategoryError::CategoryNotFound
                }
                other => AssignCategoryError::RepositoryError(other.to_string()),
            })
    }
}
