use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StatusTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(StatusTemplate::Id))
                    .col(string(StatusTemplate::GuildId))
                    .col(text(StatusTemplate::Content))
                    .col(timestamp_null(StatusTemplate::LastPostedAt))
                    .col(
                        timestamp(StatusTemplate::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_status_template_guild_id")
                    .table(StatusTemplate::Table)
                    .col(StatusTemplate::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StatusTemplate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StatusTemplate {
    Table,
    Id,
    GuildId,
    Content,
    LastPostedAt,
    CreatedAt,
}
