use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::ports::outgoing::{
    CategoryQuery, CategoryQueryError, CategoryView,
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> CategoryQueryError {
        CategoryQueryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn list_active(&self) -> Result<Vec<CategoryView>, CategoryQueryError> {
        let categories = Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(categories.iter().map(|m| m.to_view()).collect())
    }

    async fn by_slug(&self, slug: &str) -> Result<CategoryView, CategoryQueryError> {
        let normalized = slug.trim().to_lowercase();

        let category = Entity::find()
            .filter(Column::Slug.eq(&normalized))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(CategoryQueryError::NotFound)?;

        Ok(category.to_view())
    }

    async fn subcategories(
        &self,
        parent_id: Uuid,
    ) -> Result<Vec<CategoryView>, CategoryQueryError> {
        let categories = Entity::find()
            .filter(Column::ParentId.eq(parent_id))
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(categories.iter().map(|m| m.to_view()).collect())
    }
}
