use async_trait::async_trait;
use uuid::Uuid;

use crate::professional::application::ports::outgoing::{
    ProfessionalRepository, ProfessionalRepositoryError, ProfessionalUpdate, ProfessionalView,
};

#[derive(Debug, Clone)]
pub struct PatchProfessionalCommand {
    target: Uuid,
    update: ProfessionalUpdate,
}

#[derive(Debug, thiserror::Error)]
pub enum PatchProfessionalCommandError {
    #[error("Nothing to update")]
    EmptyUpdate,
}

impl PatchProfessionalCommand {
    pub fn new(
        target: Uuid,
        update: ProfessionalUpdate,
    ) -> Result<Self, PatchProfessionalCommandError> {
        if update.is_empty() {
            return Err(PatchProfessionalCommandError::EmptyUpdate);
        }

        Ok(Self { target, update })
    }

    pub fn target(&self) -> Uuid {
        self.target
    }

    pub fn update(&self) -> &ProfessionalUpdate {
        &self.update
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchProfessionalError {
    #[error("Professional not found")]
    ProfessionalNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchProfessionalUseCase: Send + Sync {
    async fn execute(
        &self,
        command: PatchProfessionalCommand,
    ) -> Result<ProfessionalView, PatchProfessionalError>;
}

#[derive(Debug, Clone)]
pub struct PatchProfessionalService<R>
where
    R: ProfessionalRepository + Send + Sync,
{
    repository: R,
}

impl<R> PatchProfessionalService<R>
where
    R: ProfessionalRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchProfessionalUseCase for PatchProfessionalService<R>
where
    R: ProfessionalRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: PatchProfessionalCommand,
    ) -> Result<ProfessionalView, PatchProfessionalError> {
        self.repository
            .update(command.target(), command.update().clone())
            .await
            .map_err(|e| match e {
                ProfessionalRepositoryError::ProfessionalNotFound => {
                    PatchProfessionalError::ProfessionalNotFound
                }
                other => PatchProfessionalError::RepositoryError(other.to_string()),
            })
    }
}
