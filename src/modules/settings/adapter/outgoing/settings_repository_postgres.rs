use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::settings::application::ports::outgoing::{
    SettingsRepository, SettingsRepositoryError, SettingsView,
};

use super::sea_orm_entity::{ActiveModel as SettingsActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct SettingsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> SettingsRepositoryError {
        SettingsRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn get_latest(&self) -> Result<Option<SettingsView>, SettingsRepositoryError> {
        let settings = Entity::find()
            .order_by_desc(Column::UpdatedAt)
            .limit(1)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(settings.map(|m| m.to_view()))
    }

    async fn upsert(
        &self,
        show_ratings: bool,
        allow_ratings: bool,
    ) -> Result<SettingsView, SettingsRepositoryError> {
        let current = Entity::find()
            .order_by_desc(Column::UpdatedAt)
            .limit(1)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let updated = match current {
            Some(model) => {
                let mut active: SettingsActiveModel = model.into();
                active.show_ratings = Set(show_ratings);
                active.allow_ratings = Set(allow_ratings);
                active.updated_at = Set(Utc::now().into());
                active.update(&*self.db).await.map_err(Self::map_db_err)?
            }
            None => {
                let active = SettingsActiveModel {
                    id: Set(Uuid::new_v4()),
                    show_ratings: Set(show_ratings),
                    allow_ratings: Set(allow_ratings),
                    updated_at: Set(Utc::now().into()),
                };
                active.insert(&*self.db).await.map_err(Self::map_db_err)?
            }
        };

        Ok(updated.to_view())
    }
}
