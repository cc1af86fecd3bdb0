use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    CreateUserData, UserFieldUpdate, UserRecord, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity, Model as UserModel};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_err(e: sea_orm::DbErr) -> UserRepositoryError {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => UserRepositoryError::UsernameTaken,
            _ => UserRepositoryError::DatabaseError(e.to_string()),
        }
    }

    async fn fetch(&self, id: Uuid) -> Result<UserModel, UserRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create(&self, data: CreateUserData) -> Result<UserRecord, UserRepositoryError> {
        let active = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            password_hash: Set(data.password_hash),
            is_admin: Set(data.is_admin),
            is_super_admin: Set(data.is_super_admin),
            ..Default::default()
        };

        let inserted: UserModel = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(inserted.to_record())
    }

    async fn update_role(
        &self,
        id: Uuid,
        is_admin: bool,
        is_super_admin: bool,
    ) -> Result<UserRecord, UserRepositoryError> {
        let mut active: UserActiveModel = self.fetch(id).await?.into();
        active.is_admin = Set(is_admin);
        active.is_super_admin = Set(is_super_admin);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(updated.to_record())
    }

    async fn update_fields(
        &self,
        id: Uuid,
        update: UserFieldUpdate,
    ) -> Result<UserRecord, UserRepositoryError> {
        let mut active: UserActiveModel = self.fetch(id).await?.into();

        if let Some(username) = update.username {
            active.username = Set(username);
        }
        if let Some(password_hash) = update.password_hash {
            active.password_hash = Set(password_hash);
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), UserRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
