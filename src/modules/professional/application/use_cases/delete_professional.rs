use async_trait::async_trait;
use uuid::Uuid;

use crate::professional::application::ports::outgoing::{
    ProfessionalRepository, ProfessionalRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProfessionalError {
    #[error("Professional not found")]
    ProfessionalNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Hard delete. Ratings keep their rows (plain columns, no FK), so history
/// survives the listing.
#[async_trait]
pub trait DeleteProfessionalUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProfessionalError>;
}

#[derive(Debug, Clone)]
pub struct DeleteProfessionalService<R>
where
    R: ProfessionalRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteProfessionalService<R>
where
    R: ProfessionalRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProfessionalUseCase for DeleteProfessionalService<R>
where
    R: ProfessionalRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProfessionalError> {
        self.repository.delete(id).await.map_err(|e| match e {
            ProfessionalRepositoryError::ProfessionalNotFound => {
                DeleteProfessionalError::ProfessionalNotFound
            }
            other => DeleteProfessionalError::RepositoryError(other.to_string()),
        })
    }
}
