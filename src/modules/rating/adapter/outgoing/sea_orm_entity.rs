use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::rating::application::ports::outgoing::RatingRecord;

// user_id and professional_id are plain columns (no FK): rating history
// survives account and listing deletes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub professional_id: Uuid,

    pub rating: i32,

    pub comment: Option<String>,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> RatingRecord {
        RatingRecord {
            id: self.id,
            user_id: self.user_id,
            professional_id: self.professional_id,
            rating: self.rating,
            comment: self.comment.clone(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
