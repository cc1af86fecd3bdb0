use async_trait::async_trait;

use crate::category::application::ports::outgoing::{
    CategoryQuery, CategoryQueryError, CategoryView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCategoriesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CategoryView>, GetCategoriesError>;
}

#[derive(Debug, Clone)]
pub struct GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCategoriesUseCase for GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CategoryView>, GetCategoriesError> {
        self.query.list_active().await.map_err(|e| match e {
            CategoryQueryError::DatabaseError(msg) => GetCategoriesError::QueryError(msg),
            other => GetCategoriesError::QueryError(other.to_string()),
        })
    }
}
