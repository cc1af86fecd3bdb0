use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Ratings are append-only. user_id and professional_id are plain
        // columns so rating history survives account and listing deletes.
        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ratings::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Ratings::UserId).uuid().not_null())
                    .col(ColumnDef::new(Ratings::ProfessionalId).uuid().not_null())
                    .col(ColumnDef::new(Ratings::Rating).integer().not_null())
                    .col(ColumnDef::new(Ratings::Comment).text())
                    .col(
                        ColumnDef::new(Ratings::CreatedAt)
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
                ALTER TABLE ratings
                ADD CONSTRAINT chk_ratings_range CHECK (rating BETWEEN 1 AND 5);
                "#,
            )
            .await?;

        // Rating history per professional, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_ratings_professional_created
                ON ratings (professional_id, created_at DESC);
                "#,
            )
            .await?;

        // Recommendation queries scan a user's ratings
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_ratings_user_id
                ON ratings (user_id);
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
                DROP INDEX IF EXISTS idx_ratings_professional_created;
                DROP INDEX IF EXISTS idx_ratings_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ratings {
    Table,
    Id,
    UserId,
    ProfessionalId,
    Rating,
    Comment,
    CreatedAt,
}
