use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Giveaway::Table)
                    .if_not_exists()
                    .col(pk_auto(Giveaway::Id))
                    .col(string(Giveaway::GuildId))
                    .col(
                        timestamp(Giveaway::StartTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Giveaway::EndTime))
                    .col(string_null(Giveaway::InfoMessageId))
                    .col(string_null(Giveaway::WinnerId))
                    .col(string_null(Giveaway::WinnerName))
                    .col(string_null(Giveaway::Code))
                    .col(integer_null(Giveaway::Level))
                    .to_owned(),
            )
            .await?;

        // Open giveaway lookups filter on guild_id + end_time IS NULL
        manager
            .create_index(
                Index::create()
                    .name("idx_giveaway_guild_id_end_time")
                    .table(Giveaway::Table)
                    .col(Giveaway::GuildId)
                    .col(Giveaway::EndTime)
                    .to_owned(),
            )
            .await?;

        // At most one open giveaway per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_giveaway_open_guild_id")
                    .table(Giveaway::Table)
                    .col(Giveaway::GuildId)
                    .unique()
                    .and_where(Expr::col(Giveaway::EndTime).is_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_giveaway_info_message_id")
                    .table(Giveaway::Table)
                    .col(Giveaway::InfoMessageId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_giveaway_info_message_id")
                    .table(Giveaway::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_giveaway_open_guild_id")
                    .table(Giveaway::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_giveaway_guild_id_end_time")
                    .table(Giveaway::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Giveaway::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Giveaway {
    Table,
    Id,
    GuildId,
    StartTime,
    EndTime,
    InfoMessageId,
    WinnerId,
    WinnerName,
    Code,
    Level,
}
