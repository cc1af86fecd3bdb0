use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A category as served to clients. `parent_id` points at another category
/// (one level of nesting in practice, nothing enforces a depth).
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
    pub slug: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Category not found")]
    NotFound,
}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// Public listing; inactive categories are hidden.
    async fn list_active(&self) -> Result<Vec<CategoryView>, CategoryQueryError>;

    async fn by_slug(&self, slug: &str) -> Result<CategoryView, CategoryQueryError>;

    async fn subcategories(&self, parent_id: Uuid)
        -> Result<Vec<CategoryView>, CategoryQueryError>;
}
