use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "professional_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub professional_id: Uuid,

    pub category_id: Uuid,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::professionals::Entity",
        from = "Column::ProfessionalId",
        to = "super::professionals::Column::Id"
    )]
    Professional,

    #[sea_orm(
        belongs_to = "crate::modules::category::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CategoryId",
        to = "crate::modules::category::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Category,
}

impl ActiveModelBehavior for ActiveModel {}
