use async_trait::async_trait;
use uuid::Uuid;

use crate::professional::application::ports::outgoing::{
    ProfessionalQuery, ProfessionalQueryError, ProfessionalView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProfessionalError {
    #[error("Professional not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSingleProfessionalUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ProfessionalView, GetSingleProfessionalError>;
}

#[derive(Debug, Clone)]
pub struct GetSingleProfessionalService<Q>
where
    Q: ProfessionalQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSingleProfessionalService<Q>
where
    Q: ProfessionalQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProfessionalUseCase for GetSingleProfessionalService<Q>
where
    Q: ProfessionalQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ProfessionalView, GetSingleProfessionalError> {
        self.query.by_id(id).await.map_err(|e| match e {
            ProfessionalQueryError::NotFound => GetSingleProfessionalError::NotFound,
            ProfessionalQueryError::DatabaseError(msg) => {
                GetSingleProfessionalError::QueryError(msg)
            }
        })
    }
}
