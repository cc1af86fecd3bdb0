use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfessionalCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfessionalCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ProfessionalCategories::ProfessionalId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessionalCategories::CategoryId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessionalCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_professional_categories_professional_id")
                            .from(
                                ProfessionalCategories::Table,
                                ProfessionalCategories::ProfessionalId,
                            )
                            .to(Professionals::Table, Professionals::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_professional_categories_category_id")
                            .from(
                                ProfessionalCategories::Table,
                                ProfessionalCategories::CategoryId,
                            )
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One link per (professional, category); assignment is idempotent
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_professional_categories_unique
                ON professional_categories (professional_id, category_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_professional_categories_category_id
                ON professional_categories (category_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_professional_categories_unique;
                DROP INDEX IF EXISTS idx_professional_categories_category_id;
                "#,
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(ProfessionalCategories::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ProfessionalCategories {
    Table,
    Id,
    ProfessionalId,
    CategoryId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Professionals {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
}
