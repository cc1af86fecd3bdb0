use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CategoryUpdate, CategoryView, CreateCategoryData,
};

use super::sea_orm_entity::{ActiveModel as CategoryActiveModel, Entity, Model as CategoryModel};

#[derive(Debug, Clone)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_err(e: sea_orm::DbErr) -> CategoryRepositoryError {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => CategoryRepositoryError::SlugTaken,
            _ => CategoryRepositoryError::DatabaseError(e.to_string()),
        }
    }

    async fn fetch(&self, id: Uuid) -> Result<CategoryModel, CategoryRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(CategoryRepositoryError::CategoryNotFound)
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create(
        &self,
        data: CreateCategoryData,
    ) -> Result<CategoryView, CategoryRepositoryError> {
        let active = CategoryActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            parent_id: Set(data.parent_id),
            slug: Set(data.slug),
            is_active: Set(data.is_active),
            ..Default::default()
        };

        let inserted: CategoryModel = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(inserted.to_view())
    }

    async fn update(
        &self,
        id: Uuid,
        update: CategoryUpdate,
    ) -> Result<CategoryView, CategoryRepositoryError> {
        let mut active: CategoryActiveModel = self.fetch(id).await?.into();

        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(description) = update.description {
            active.description = Set(Some(description));
        }
        if let Some(parent_id) = update.parent_id {
            active.parent_id = Set(Some(parent_id));
        }
        if let Some(is_active) = update.is_active {
            active.is_active = Set(is_active);
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(updated.to_view())
    }

    async fn delete(&self, id: Uuid) -> Result<(), CategoryRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(CategoryRepositoryError::CategoryNotFound);
        }

        Ok(())
    }
}
