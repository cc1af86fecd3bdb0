use async_trait::async_trait;
use uuid::Uuid;

use crate::professional::application::ports::outgoing::{
    CreateProfessionalData, ProfessionalRepository, ProfessionalRepositoryError, ProfessionalView,
};

//
// ──────────────────────────────────────────────────────────
// Create Professional Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProfessionalCommand {
    data: CreateProfessionalData,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateProfessionalCommandError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Name too long")]
    NameTooLong,
}

fn required(field: &'static str, value: &str) -> Result<String, CreateProfessionalCommandError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CreateProfessionalCommandError::EmptyField(field));
    }
    Ok(value.to_string())
}

impl CreateProfessionalCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        occupation: String,
        description: String,
        photo_url: String,
        whatsapp: String,
        detailed_description: String,
        location: Option<String>,
        category_id: Option<Uuid>,
    ) -> Result<Self, CreateProfessionalCommandError> {
        let name = required("name", &name)?;

        if name.len() > 100 {
            return Err(CreateProfessionalCommandError::NameTooLong);
        }

        Ok(Self {
            data: CreateProfessionalData {
                name,
                occupation: required("occupation", &occupation)?,
                description: required("description", &description)?,
                photo_url: required("photo_url", &photo_url)?,
                whatsapp: required("whatsapp", &whatsapp)?,
                detailed_description: required("detailed_description", &detailed_description)?,
                location: location.map(|l| l.trim().to_string()).unwrap_or_default(),
                category_id,
            },
        })
    }

    pub fn data(&self) -> &CreateProfessionalData {
        &self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProfessionalError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProfessionalUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateProfessionalCommand,
    ) -> Result<ProfessionalView, CreateProfessionalError>;
}

#[derive(Debug, Clone)]
pub struct CreateProfessionalService<R>
where
    R: ProfessionalRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateProfessionalService<R>
where
    R: ProfessionalRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProfessionalUseCase for CreateProfessionalService<R>
where
    R: ProfessionalRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateProfessionalCommand,
    ) -> Result<ProfessionalView, CreateProfessionalError> {
        self.repository
            .create(command.data().clone())
            .await
            .map_err(|e| match e {
                ProfessionalRepositoryError::DatabaseError(msg) => {
                    CreateProfessionalError::RepositoryError(msg)
                }
                other => CreateProfessionalError::RepositoryError(other.to_string()),
            })
    }
}
