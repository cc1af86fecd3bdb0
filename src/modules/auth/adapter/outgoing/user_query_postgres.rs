use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserRecord};

use super::sea_orm_entity::users::{Column, Entity};

#[derive(Debug, Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> UserQueryError {
        UserQueryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn by_id(&self, id: Uuid) -> Result<Option<UserRecord>, UserQueryError> {
        let user = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(user.map(|m| m.to_record()))
    }

    async fn by_username(&self, username: &str) -> Result<Option<UserRecord>, UserQueryError> {
        let user = Entity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(user.map(|m| m.to_record()))
    }

    async fn list(&self) -> Result<Vec<UserRecord>, UserQueryError> {
        let users = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(users.iter().map(|m| m.to_record()).collect())
    }
}
