use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::professional::application::ports::outgoing::{
    ProfessionalQuery, ProfessionalQueryError, ProfessionalView,
};

use super::sea_orm_entity::professionals::{Column, Entity};

#[derive(Debug, Clone)]
pub struct ProfessionalQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfessionalQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> ProfessionalQueryError {
        ProfessionalQueryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl ProfessionalQuery for ProfessionalQueryPostgres {
    async fn list(&self) -> Result<Vec<ProfessionalView>, ProfessionalQueryError> {
        let professionals = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(professionals.iter().map(|m| m.to_view()).collect())
    }

    async fn by_id(&self, id: Uuid) -> Result<ProfessionalView, ProfessionalQueryError> {
        let professional = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(ProfessionalQueryError::NotFound)?;

        Ok(professional.to_view())
    }
}
