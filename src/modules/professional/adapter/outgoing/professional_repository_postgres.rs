use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::professional::application::ports::outgoing::{
    CreateProfessionalData, ProfessionalRepository, ProfessionalRepositoryError,
    ProfessionalUpdate, ProfessionalView,
};

use super::sea_orm_entity::professionals::{
    ActiveModel as ProfessionalActiveModel, Entity, Model as ProfessionalModel,
};

#[derive(Debug, Clone)]
pub struct ProfessionalRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfessionalRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> ProfessionalRepositoryError {
        ProfessionalRepositoryError::DatabaseError(e.to_string())
    }

    async fn fetch(&self, id: Uuid) -> Result<ProfessionalModel, ProfessionalRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(ProfessionalRepositoryError::ProfessionalNotFound)
    }
}

#[async_trait]
impl ProfessionalRepository for ProfessionalRepositoryPostgres {
    async fn create(
        &self,
        data: CreateProfessionalData,
    ) -> Result<ProfessionalView, ProfessionalRepositoryError> {
        let active = ProfessionalActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            occupation: Set(data.occupation),
            description: Set(data.description),
            photo_url: Set(data.photo_url),
            whatsapp: Set(data.whatsapp),
            detailed_description: Set(data.detailed_description),
            location: Set(data.location),
            average_rating: Set(0),
            total_ratings: Set(0),
            category_id: Set(data.category_id),
            ..Default::default()
        };

        let inserted: ProfessionalModel =
            active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.to_view())
    }

    async fn update(
        &self,
        id: Uuid,
        update: ProfessionalUpdate,
    ) -> Result<ProfessionalView, ProfessionalRepositoryError> {
        let mut active: ProfessionalActiveModel = self.fetch(id).await?.into();

        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(occupation) = update.occupation {
            active.occupation = Set(occupation);
        }
        if let Some(description) = update.description {
            active.description = Set(description);
        }
        if let Some(photo_url) = update.photo_url {
            active.photo_url = Set(photo_url);
        }
        if let Some(whatsapp) = update.whatsapp {
            active.whatsapp = Set(whatsapp);
        }
        if let Some(detailed_description) = update.detailed_description {
            active.detailed_description = Set(detailed_description);
        }
        if let Some(location) = update.location {
            active.location = Set(location);
        }
        if let Some(category_id) = update.category_id {
            active.category_id = Set(Some(category_id));
        }

        let updated = active.update(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(updated.to_view())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProfessionalRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProfessionalRepositoryError::ProfessionalNotFound);
        }

        Ok(())
    }
}
