use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::professional::adapter::outgoing::sea_orm_entity::professionals;
use crate::modules::rating::adapter::outgoing::sea_orm_entity as ratings;
use crate::professional::application::ports::outgoing::ProfessionalView;
use crate::recommendation::application::ports::outgoing::{
    RecommendationEntry, RecommendationRepository, RecommendationRepositoryError,
};

use super::sea_orm_entity::{ActiveModel as RecommendationActiveModel, Column, Entity};

#[derive(Clone)]
pub struct RecommendationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecommendationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Professionals whose occupation matches one the user rated well.
    /// The subquery cannot be expressed with entity combinators alone, so
    /// the statement is written out.
    fn occupation_match_stmt(user_id: Uuid, limit: u64) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT p.*
            FROM professionals p
            WHERE p.occupation IN (
                SELECT liked.occupation
                FROM professionals liked
                JOIN ratings r ON r.professional_id = liked.id
                WHERE r.user_id = $1
                  AND r.rating >= 4
            )
            ORDER BY p.average_rating DESC
            LIMIT $2
            "#,
            vec![user_id.into(), (limit as i64).into()],
        )
    }

    fn map_db_err(e: sea_orm::DbErr) -> RecommendationRepositoryError {
        RecommendationRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl RecommendationRepository for RecommendationRepositoryPostgres {
    async fn count_user_ratings(
        &self,
        user_id: Uuid,
    ) -> Result<u64, RecommendationRepositoryError> {
        ratings::Entity::find()
            .filter(ratings::Column::UserId.eq(user_id))
            .count(&*self.db)
            .await
            .map_err(Self::map_db_err)
    }

    async fn top_rated(
        &self,
        limit: u64,
    ) -> Result<Vec<ProfessionalView>, RecommendationRepositoryError> {
        let professionals = professionals::Entity::find()
            .order_by_desc(professionals::Column::AverageRating)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(professionals.iter().map(|m| m.to_view()).collect())
    }

    async fn liked_occupation_matches(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<ProfessionalView>, RecommendationRepositoryError> {
        let professionals = professionals::Entity::find()
            .from_raw_sql(Self::occupation_match_stmt(user_id, limit))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(professionals.iter().map(|m| m.to_view()).collect())
    }

    async fn replace_for_user(
        &self,
        user_id: Uuid,
        entries: Vec<RecommendationEntry>,
    ) -> Result<(), RecommendationRepositoryError> {
        // Delete-then-insert, no transaction: the cache is advisory and a
        // reader may see it half-built
        Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        for entry in entries {
            let active = RecommendationActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user_id),
                professional_id: Set(entry.professional_id),
                score: Set(entry.score),
                ..Default::default()
            };

            active.insert(&*self.db).await.map_err(Self::map_db_err)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::professional_model;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn top_rated_maps_rows_in_store_order() {
        let rows = vec![
            professional_model("best", "Plomero", 5, 20),
            professional_model("second", "Electricista", 4, 12),
        ];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows])
            .into_connection();

        let repo = RecommendationRepositoryPostgres::new(Arc::new(db));

        let views = repo.top_rated(5).await.unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].name, "best");
        assert_eq!(views[0].average_rating, 5);
    }

    #[tokio::test]
    async fn occupation_matches_deserialize_professional_rows() {
        let rows = vec![professional_model("match", "Electricista", 4, 7)];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows])
            .into_connection();

        let repo = RecommendationRepositoryPostgres::new(Arc::new(db));

        let views = repo
            .liked_occupation_matches(Uuid::new_v4(), 5)
            .await
            .unwrap();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].occupation, "Electricista");
    }
}
