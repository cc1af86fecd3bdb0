use async_trait::async_trait;
use uuid::Uuid;

use crate::professional::application::ports::outgoing::{
    ProfessionalCategoryRepository, ProfessionalCategoryRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveCategoryError {
    #[error("Assignment not found")]
    LinkNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        professional_id: Uuid,
        category_id: Uuid,
    ) -> Result<(), RemoveCategoryError>;
}

#[derive(Debug, Clone)]
pub struct RemoveCategoryService<R>
where
    R: ProfessionalCategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> RemoveCategoryService<R>
where
    R: ProfessionalCategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RemoveCategoryUseCase for RemoveCategoryService<R>
where
    R: ProfessionalCategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        professional_id: Uuid,
        category_id: Uuid,
    ) -> Result<(), RemoveCategoryError> {
        self.repository
            .remove(professional_id, category_id)
            .await
            .map_err(|e| match e {
                ProfessionalCategoryRepositoryError::LinkNotFound => {
                    RemoveCategoryError::LinkNotFound
                }
                other => RemoveCategoryError::RepositoryError(other.to_string()),
            })
    }
}
