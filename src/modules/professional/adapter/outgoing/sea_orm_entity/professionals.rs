use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::professional::application::ports::outgoing::ProfessionalView;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "professionals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub name: String,

    pub occupation: String,

    pub description: String,

    pub photo_url: String,

    pub whatsapp: String,

    pub detailed_description: String,

    pub location: String,

    // Maintained only by the rating aggregator
    pub average_rating: i32,

    pub total_ratings: i32,

    pub category_id: Option<Uuid>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_view(&self) -> ProfessionalView {
        ProfessionalView {
            id: self.id,
            name: self.name.clone(),
            occupation: self.occupation.clone(),
            description: self.description.clone(),
            photo_url: self.photo_url.clone(),
            whatsapp: self.whatsapp.clone(),
            detailed_description: self.detailed_description.clone(),
            location: self.location.clone(),
            average_rating: self.average_rating,
            total_ratings: self.total_ratings,
            category_id: self.category_id,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::category::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CategoryId",
        to = "crate::modules::category::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Category,
}

impl ActiveModelBehavior for ActiveModel {}
