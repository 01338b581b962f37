use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create topics table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Topics::Id)
                            .string()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()::varchar")),
                    )
                    .col(ColumnDef::new(Topics::Title).text().not_null())
                    .col(
                        ColumnDef::new(Topics::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Topics::Subtopics)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Topics::Status)
                            .text()
                            .not_null()
                            .default("not_started"),
                    )
                    .col(
                        ColumnDef::new(Topics::AssignedTo)
                            .text()
                            .not_null()
                            .default("none"),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Dashboard partitions topics by assignee
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_topics_assigned_to
                ON topics (assigned_to);
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
                DROP INDEX IF EXISTS idx_topics_assigned_to;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
    Title,
    Description,
    Subtopics,
    Status,
    AssignedTo,
}
