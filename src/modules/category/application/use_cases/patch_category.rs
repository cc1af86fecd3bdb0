use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CategoryUpdate, CategoryView,
};

//
// ──────────────────────────────────────────────────────────
// Patch Category Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct PatchCategoryCommand {
    target: Uuid,
    update: CategoryUpdate,
}

#[derive(Debug, thiserror::Error)]
pub enum PatchCategoryCommandError {
    #[error("Nothing to update")]
    EmptyUpdate,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,
}

impl PatchCategoryCommand {
    pub fn new(
        target: Uuid,
        name: Option<String>,
        description: Option<String>,
        parent_id: Option<Uuid>,
        is_active: Option<bool>,
    ) -> Result<Self, PatchCategoryCommandError> {
        if name.is_none() && description.is_none() && parent_id.is_none() && is_active.is_none() {
            return Err(PatchCategoryCommandError::EmptyUpdate);
        }

        let name = match name {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(PatchCategoryCommandError::EmptyName);
                }
                if trimmed.len() > 100 {
                    return Err(PatchCategoryCommandError::NameTooLong);
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        Ok(Self {
            target,
            update: CategoryUpdate {
                name,
                description,
                parent_id,
                is_active,
            },
        })
    }

    pub fn target(&self) -> Uuid {
        self.target
    }

    pub fn update(&self) -> &CategoryUpdate {
        &self.update
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchCategoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: PatchCategoryCommand,
    ) -> Result<CategoryView, PatchCategoryError>;
}

#[derive(Debug, Clone)]
pub struct PatchCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> PatchCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchCategoryUseCase for PatchCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: PatchCategoryCommand,
    ) -> Result<CategoryView, PatchCategoryError> {
        self.repository
            .update(command.target(), command.update().clone())
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::CategoryNotFound => PatchCategoryError::CategoryNotFound,
                other => PatchCategoryError::RepositoryError(other.to_string()),
            })
    }
}
