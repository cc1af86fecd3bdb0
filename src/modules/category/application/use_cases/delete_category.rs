use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCategoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Hard delete. Professional links are dropped by the store; professionals
/// keeping this category as their primary fall back to none.
#[async_trait]
pub trait DeleteCategoryUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCategoryError>;
}

#[derive(Debug, Clone)]
pub struct DeleteCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCategoryUseCase for DeleteCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCategoryError> {
        self.repository.delete(id).await.map_err(|e| match e {
            CategoryRepositoryError::CategoryNotFound => DeleteCategoryError::CategoryNotFound,
            other => DeleteCategoryError::RepositoryError(other.to_string()),
        })
    }
}
