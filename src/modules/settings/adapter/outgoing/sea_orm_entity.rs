use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::settings::application::ports::outgoing::SettingsView;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "system_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub show_ratings: bool,

    pub allow_ratings: bool,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_view(&self) -> SettingsView {
        SettingsView {
            show_ratings: self.show_ratings,
            allow_ratings: self.allow_ratings,
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
