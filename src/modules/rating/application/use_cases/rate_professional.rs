use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::rating::application::ports::outgoing::{
    NewRating, RatingRecord, RatingRepository, RatingRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Rate Professional Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RateProfessionalCommand {
    rater: UserId,
    professional_id: Uuid,
    rating: i32,
    comment: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RateProfessionalCommandError {
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
}

impl RateProfessionalCommand {
    pub fn new(
        rater: UserId,
        professional_id: Uuid,
        rating: i32,
        comment: Option<String>,
    ) -> Result<Self, RateProfessionalCommandError> {
        if !(1..=5).contains(&rating) {
            return Err(RateProfessionalCommandError::RatingOutOfRange);
        }

        // Blank comments are stored as absent
        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            rater,
            professional_id,
            rating,
            comment,
        })
    }

    pub fn rater(&self) -> UserId {
        self.rater
    }

    pub fn professional_id(&self) -> Uuid {
        self.professional_id
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn comment(&self) -> Option<&String> {
        self.comment.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RateProfessionalError {
    #[error("Professional not found")]
    ProfessionalNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RateProfessionalUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RateProfessionalCommand,
    ) -> Result<RatingRecord, RateProfessionalError>;
}

#[derive(Debug, Clone)]
pub struct RateProfessionalService<R>
where
    R: RatingRepository + Send + Sync,
{
    repository: R,
}

impl<R> RateProfessionalService<R>
where
    R: RatingRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RateProfessionalUseCase for RateProfessionalService<R>
where
    R: RatingRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RateProfessionalCommand,
    ) -> Result<RatingRecord, RateProfessionalError> {
        let data = NewRating {
            user_id: command.rater().value(),
            professional_id: command.professional_id(),
            rating: command.rating(),
            comment: command.comment().cloned(),
        };

        self.repository.add_rating(data).await.map_err(|e| match e {
            RatingRepositoryError::ProfessionalNotFound => {
                RateProfessionalError::ProfessionalNotFound
            }
            other => RateProfessionalError::RepositoryError(other.to_string()),
        })
    }
}
