use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CategoryView, CreateCategoryData,
};

/// Lowercase the name and collapse every non-alphanumeric run into a single
/// dash. "Plomería & Gas" becomes "plomer-a-gas".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

//
// ──────────────────────────────────────────────────────────
// Create Category Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    name: String,
    description: Option<String>,
    parent_id: Option<Uuid>,
    slug: String,
    is_active: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateCategoryCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    /// The name contained no characters usable in a slug.
    #[error("Name cannot be converted to a slug")]
    UnsluggableName,
}

impl CreateCategoryCommand {
    pub fn new(
        name: String,
        description: Option<String>,
        parent_id: Option<Uuid>,
        is_active: Option<bool>,
    ) -> Result<Self, CreateCategoryCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CreateCategoryCommandError::EmptyName);
        }

        if name.len() > 100 {
            return Err(CreateCategoryCommandError::NameTooLong);
        }

        let slug = slugify(name);
        if slug.is_empty() {
            return Err(CreateCategoryCommandError::UnsluggableName);
        }

        Ok(Self {
            name: name.to_string(),
            description,
            parent_id,
            slug,
            is_active: is_active.unwrap_or(true),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("Slug already exists")]
    SlugTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<CategoryView, CreateCategoryError>;
}

#[derive(Debug, Clone)]
pub struct CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCategoryUseCase for CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<CategoryView, CreateCategoryError> {
        let data = CreateCategoryData {
            name: command.name.clone(),
            description: command.description.clone(),
            parent_id: command.parent_id,
            slug: command.slug.clone(),
            is_active: command.is_active,
        };

        self.repository.create(data).await.map_err(|e| match e {
            CategoryRepositoryError::SlugTaken => CreateCategoryError::SlugTaken,
            other => CreateCategoryError::RepositoryError(other.to_string()),
        })
    }
}
