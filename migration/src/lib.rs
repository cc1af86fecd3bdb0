pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_categories_table;
mod m20250301_000003_create_professionals_table;
mod m20250301_000004_create_professional_categories_table;
mod m20250301_000005_create_ratings_table;
mod m20250301_000006_create_recommendations_table;
mod m20250301_000007_create_system_settings_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_categories_table::Migration),
            Box::new(m20250301_000003_create_professionals_table::Migration),
            Box::new(m20250301_000004_create_professional_categories_table::Migration),
            Box::new(m20250301_000005_create_ratings_table::Migration),
            Box::new(m20250301_000006_create_recommendations_table::Migration),
            Box::new(m20250301_000007_create_system_settings_table::Migration),
        ]
    }
}
