use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::professional::adapter::outgoing::sea_orm_entity::professionals;
use crate::rating::application::ports::outgoing::{
    NewRating, RatingRecord, RatingRepository, RatingRepositoryError,
};

use super::sea_orm_entity::{ActiveModel as RatingActiveModel, Column, Entity};

/// One rating added to a running `(total, average)` pair.
///
/// The new average folds the incoming score into the ROUNDED previous
/// average, `round((average * total + rating) / (total + 1))`. Accumulating
/// from rounded values loses fractional precision over many ratings; that
/// approximation is part of the storage contract, not an accident.
pub(crate) fn next_aggregates(total: i32, average: i32, rating: i32) -> (i32, i32) {
    let new_total = total + 1;
    let new_average = ((average as i64 * total as i64 + rating as i64) as f64
        / new_total as f64)
        .round() as i32;

    (new_total, new_average)
}

#[derive(Debug, Clone)]
pub struct RatingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RatingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> RatingRepositoryError {
        RatingRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryPostgres {
    async fn add_rating(&self, data: NewRating) -> Result<RatingRecord, RatingRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        // FOR UPDATE: concurrent ratings of the same professional queue up
        // here instead of racing the read-modify-write below
        let professional = professionals::Entity::find_by_id(data.professional_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(RatingRepositoryError::ProfessionalNotFound)?;

        let active = RatingActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id),
            professional_id: Set(data.professional_id),
            rating: Set(data.rating),
            comment: Set(data.comment),
            ..Default::default()
        };

        let inserted = active.insert(&txn).await.map_err(Self::map_db_err)?;

        let (new_total, new_average) = next_aggregates(
            professional.total_ratings,
            professional.average_rating,
            data.rating,
        );

        let mut professional: professionals::ActiveModel = professional.into();
        professional.total_ratings = Set(new_total);
        professional.average_rating = Set(new_average);
        professional.update(&txn).await.map_err(Self::map_db_err)?;

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(inserted.to_record())
    }

    async fn ratings_for_professional(
        &self,
        professional_id: Uuid,
    ) -> Result<Vec<RatingRecord>, RatingRepositoryError> {
        let ratings = Entity::find()
            .filter(Column::ProfessionalId.eq(professional_id))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(ratings.iter().map(|m| m.to_record()).collect())
    }
}
