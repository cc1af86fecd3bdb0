use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::outgoing::{CategoryQuery, CategoryView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSubcategoriesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Children of an unknown parent are simply an empty list, mirroring the
/// underlying filter.
#[async_trait]
pub trait GetSubcategoriesUseCase: Send + Sync {
    async fn execute(&self, parent_id: Uuid) -> Result<Vec<CategoryView>, GetSubcategoriesError>;
}

#[derive(Debug, Clone)]
pub struct GetSubcategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSubcategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSubcategoriesUseCase for GetSubcategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self, parent_id: Uuid) -> Result<Vec<CategoryView>, GetSubcategoriesError> {
        self.query
            .subcategories(parent_id)
            .await
            .map_err(|e| GetSubcategoriesError::QueryError(e.to_string()))
    }
}
