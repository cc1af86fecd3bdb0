use async_trait::async_trait;
use uuid::Uuid;

use crate::professional::application::ports::outgoing::ProfessionalView;

#[derive(Debug, Clone)]
pub struct CreateProfessionalData {
    pub name: String,
    pub occupation: String,
    pub description: String,
    pub photo_url: String,
    pub whatsapp: String,
    pub detailed_description: String,
    pub location: String,
    pub category_id: Option<Uuid>,
}

/// Partial update; `None` fields are left untouched. Rating aggregates are
/// absent: only the rating aggregator writes those.
#[derive(Debug, Clone, Default)]
pub struct ProfessionalUpdate {
    pub name: Option<String>,
    pub occupation: Option<String>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub whatsapp: Option<String>,
    pub detailed_description: Option<String>,
    pub location: Option<String>,
    pub category_id: Option<Uuid>,
}

impl ProfessionalUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.occupation.is_none()
            && self.description.is_none()
            && self.photo_url.is_none()
            && self.whatsapp.is_none()
            && self.detailed_description.is_none()
            && self.location.is_none()
            && self.category_id.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfessionalRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Professional not found")]
    ProfessionalNotFound,
}

#[async_trait]
pub trait ProfessionalRepository: Send + Sync {
    async fn create(
        &self,
        data: CreateProfessionalData,
    ) -> Result<ProfessionalView, ProfessionalRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        update: ProfessionalUpdate,
    ) -> Result<ProfessionalView, ProfessionalRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProfessionalRepositoryError>;
}
