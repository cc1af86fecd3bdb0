use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Advisory cache, fully replaced per user on recomputation.
        manager
            .create_table(
                Table::create()
                    .table(Recommendations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Recommendations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Recommendations::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Recommendations::ProfessionalId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Recommendations::Score).integer().not_null())
                    .col(
                        ColumnDef::new(Recommendations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_recommendations_user_id
                ON recommendations (user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_recommendations_user_id")
            .await?;

        manager
            .drop_table(Table::drop().table(Recommendations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Recommendations {
    Table,
    Id,
    UserId,
    ProfessionalId,
    Score,
    CreatedAt,
}
