use async_trait::async_trait;

use crate::category::application::ports::outgoing::{
    CategoryQuery, CategoryQueryError, CategoryView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCategoryBySlugError {
    #[error("Category not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCategoryBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<CategoryView, GetCategoryBySlugError>;
}

#[derive(Debug, Clone)]
pub struct GetCategoryBySlugService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCategoryBySlugService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCategoryBySlugUseCase for GetCategoryBySlugService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<CategoryView, GetCategoryBySlugError> {
        self.query.by_slug(slug).await.map_err(|e| match e {
            CategoryQueryError::NotFound => GetCategoryBySlugError::NotFound,
            CategoryQueryError::DatabaseError(msg) => GetCategoryBySlugError::QueryError(msg),
        })
    }
}
