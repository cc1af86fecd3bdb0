use async_trait::async_trait;

use crate::professional::application::ports::outgoing::{ProfessionalQuery, ProfessionalView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfessionalsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetProfessionalsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProfessionalView>, GetProfessionalsError>;
}

#[derive(Debug, Clone)]
pub struct GetProfessionalsService<Q>
where
    Q: ProfessionalQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProfessionalsService<Q>
where
    Q: ProfessionalQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProfessionalsUseCase for GetProfessionalsService<Q>
where
    Q: ProfessionalQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProfessionalView>, GetProfessionalsError> {
        self.query
            .list()
            .await
            .map_err(|e| GetProfessionalsError::QueryError(e.to_string()))
    }
}
