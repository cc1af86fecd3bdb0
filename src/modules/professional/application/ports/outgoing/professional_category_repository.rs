use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::category::application::ports::outgoing::CategoryView;
use crate::professional::application::ports::outgoing::ProfessionalView;

/// A professional ↔ category link. Auxiliary categories beyond the
/// professional's primary `category_id`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryAssignment {
    pub professional_id: Uuid,
    pub category_id: Uuid,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfessionalCategoryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Professional not found")]
    ProfessionalNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Assignment not found")]
    LinkNotFound,
}

#[async_trait]
pub trait ProfessionalCategoryRepository: Send + Sync {
    /// Idempotent: linking an already-linked pair succeeds.
    async fn assign(
        &self,
        professional_id: Uuid,
        category_id: Uuid,
    ) -> Result<CategoryAssignment, ProfessionalCategoryRepositoryError>;

    async fn remove(
        &self,
        professional_id: Uuid,
        category_id: Uuid,
    ) -> Result<(), ProfessionalCategoryRepositoryError>;

    async fn categories_of(
        &self,
        professional_id: Uuid,
    ) -> Result<Vec<CategoryView>, ProfessionalCategoryRepositoryError>;

    async fn professionals_in(
        &self,
        category_id: Uuid,
    ) -> Result<Vec<ProfessionalView>, ProfessionalCategoryRepositoryError>;
}
