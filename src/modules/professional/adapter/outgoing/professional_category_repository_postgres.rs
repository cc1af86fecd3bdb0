use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    JoinType, QueryFilter, QuerySelect, RelationTrait, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::ports::outgoing::CategoryView;
use crate::modules::category::adapter::outgoing::sea_orm_entity as categories;
use crate::professional::application::ports::outgoing::{
    CategoryAssignment, ProfessionalCategoryRepository, ProfessionalCategoryRepositoryError,
    ProfessionalView,
};

use super::sea_orm_entity::{professional_categories, professionals};

#[derive(Clone)]
pub struct ProfessionalCategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfessionalCategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Guarded, idempotent insert:
    /// - professional and category must both exist
    /// - on conflict (professional_id, category_id) do nothing
    fn guarded_insert_stmt(professional_id: Uuid, category_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO professional_categories (professional_id, category_id)
            SELECT p.id, c.id
            FROM professionals p
            JOIN categories c
              ON c.id = $2
            WHERE p.id = $1
            ON CONFLICT (professional_id, category_id) DO NOTHING
            "#,
            vec![professional_id.into(), category_id.into()],
        )
    }

    /// Deterministic probe for why the guarded insert affected 0 rows:
    /// - professional_ok: professional exists
    /// - category_ok: category exists
    /// - link_exists: link already present (idempotent success)
    fn probe_stmt(professional_id: Uuid, category_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              EXISTS (
                SELECT 1 FROM professionals p WHERE p.id = $1
              ) AS professional_ok,
              EXISTS (
                SELECT 1 FROM categories c WHERE c.id = $2
              ) AS category_ok,
              EXISTS (
                SELECT 1
                FROM professional_categories pc
                WHERE pc.professional_id = $1
                  AND pc.category_id = $2
              ) AS link_exists
            "#,
            vec![professional_id.into(), category_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> ProfessionalCategoryRepositoryError {
        ProfessionalCategoryRepositoryError::DatabaseError(e.to_string())
    }

    /// Resolve why the guarded insert affected 0 rows. Priority:
    /// 1) ProfessionalNotFound
    /// 2) CategoryNotFound
    /// 3) link exists => idempotent Ok
    async fn resolve_insert_failure<C>(
        conn: &C,
        professional_id: Uuid,
        category_id: Uuid,
    ) -> Result<(), ProfessionalCategoryRepositoryError>
    where
        C: ConnectionTrait,
    {
        let row = conn
            .query_one(Self::probe_stmt(professional_id, category_id))
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                ProfessionalCategoryRepositoryError::DatabaseError(
                    "Probe query returned no rows".to_string(),
                )
            })?;

        let professional_ok: bool = row.try_get("", "professional_ok").unwrap_or(false);
        let category_ok: bool = row.try_get("", "category_ok").unwrap_or(false);
        let link_exists: bool = row.try_get("", "link_exists").unwrap_or(false);

        if !professional_ok {
            return Err(ProfessionalCategoryRepositoryError::ProfessionalNotFound);
        }
        if !category_ok {
            return Err(ProfessionalCategoryRepositoryError::CategoryNotFound);
        }
        if link_exists {
            return Ok(());
        }

        Err(ProfessionalCategoryRepositoryError::DatabaseError(
            "Guarded insert affected no rows for an unknown reason".to_string(),
        ))
    }
}

#[async_trait]
impl ProfessionalCategoryRepository for ProfessionalCategoryRepositoryPostgres {
    async fn assign(
        &self,
        professional_id: Uuid,
        category_id: Uuid,
    ) -> Result<CategoryAssignment, ProfessionalCategoryRepositoryError> {
        let result = self
            .db
            .execute(Self::guarded_insert_stmt(professional_id, category_id))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 0 {
            Self::resolve_insert_failure(&*self.db, professional_id, category_id).await?;
        }

        Ok(CategoryAssignment {
            professional_id,
            category_id,
        })
    }

    async fn remove(
        &self,
        professional_id: Uuid,
        category_id: Uuid,
    ) -> Result<(), ProfessionalCategoryRepositoryError> {
        let result = professional_categories::Entity::delete_many()
            .filter(professional_categories::Column::ProfessionalId.eq(professional_id))
            .filter(professional_categories::Column::CategoryId.eq(category_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProfessionalCategoryRepositoryError::LinkNotFound);
        }

        Ok(())
    }

    async fn categories_of(
        &self,
        professional_id: Uuid,
    ) -> Result<Vec<CategoryView>, ProfessionalCategoryRepositoryError> {
        let categories = categories::Entity::find()
            .join_rev(
                JoinType::InnerJoin,
                professional_categories::Relation::Category.def(),
            )
            .filter(professional_categories::Column::ProfessionalId.eq(professional_id))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(categories.iter().map(|m| m.to_view()).collect())
    }

    async fn professionals_in(
        &self,
        category_id: Uuid,
    ) -> Result<Vec<ProfessionalView>, ProfessionalCategoryRepositoryError> {
        let professionals = professionals::Entity::find()
            .join_rev(
                JoinType::InnerJoin,
                professional_categories::Relation::Professional.def(),
            )
            .filter(professional_categories::Column::CategoryId.eq(category_id))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(professionals.iter().map(|m| m.to_view()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn assign_succeeds_when_insert_lands() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = ProfessionalCategoryRepositoryPostgres::new(Arc::new(db));

        let professional_id = Uuid::new_v4();
        let category_id = Uuid::new_v4();

        let link = repo.assign(professional_id, category_id).await.unwrap();

        assert_eq!(link.professional_id, professional_id);
        assert_eq!(link.category_id, category_id);
    }

    #[tokio::test]
    async fn remove_missing_link_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ProfessionalCategoryRepositoryPostgres::new(Arc::new(db));

        let result = repo.remove(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(
            result,
            Err(ProfessionalCategoryRepositoryError::LinkNotFound)
        ));
    }

    #[tokio::test]
    async fn remove_existing_link_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = ProfessionalCategoryRepositoryPostgres::new(Arc::new(db));

        assert!(repo.remove(Uuid::new_v4(), Uuid::new_v4()).await.is_ok());
    }
}
