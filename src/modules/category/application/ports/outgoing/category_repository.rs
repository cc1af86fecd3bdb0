use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::outgoing::CategoryView;

#[derive(Debug, Clone)]
pub struct CreateCategoryData {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
    pub slug: String,
    pub is_active: bool,
}

/// Partial update; `None` fields are left untouched. The slug is fixed at
/// creation so existing links keep resolving.
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Slug already exists")]
    SlugTaken,

    #[error("Category not found")]
    CategoryNotFound,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, data: CreateCategoryData)
        -> Result<CategoryView, CategoryRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        update: CategoryUpdate,
    ) -> Result<CategoryView, CategoryRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CategoryRepositoryError>;
}
