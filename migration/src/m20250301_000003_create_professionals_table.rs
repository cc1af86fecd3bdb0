use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Professionals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professionals::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Professionals::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professionals::Occupation)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Professionals::Description).text().not_null())
                    .col(ColumnDef::new(Professionals::PhotoUrl).text().not_null())
                    .col(
                        ColumnDef::new(Professionals::Whatsapp)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professionals::DetailedDescription)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professionals::Location)
                            .string_len(120)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Professionals::AverageRating)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Professionals::TotalRatings)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Professionals::CategoryId).uuid())
                    .col(
                        ColumnDef::new(Professionals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Professionals::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_professionals_category_id")
                            .from(Professionals::Table, Professionals::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Recommendation queries order and filter on these
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_professionals_average_rating
                ON professionals (average_rating DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_professionals_occupation
                ON professionals (occupation);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_professionals_updated_at
                BEFORE UPDATE ON professionals
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_professionals_updated_at ON professionals",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_professionals_average_rating;
                DROP INDEX IF EXISTS idx_professionals_occupation;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Professionals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Professionals {
    Table,
    Id,
    Name,
    Occupation,
    Description,
    PhotoUrl,
    Whatsapp,
    DetailedDescription,
    Location,
    AverageRating,
    TotalRatings,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
}
