use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerConfig::Id))
                    .col(string_uniq(ServerConfig::GuildId))
                    .col(string_null(ServerConfig::AdminRoleId))
                    .col(string_null(ServerConfig::GiveawayChannelId))
                    .col(string_null(ServerConfig::ThxInfoChannelId))
                    .col(string_null(ServerConfig::UnconditionalChannelId))
                    .col(string_null(ServerConfig::ConditionalChannelId))
                    .col(string_null(ServerConfig::HelperRoleId))
                    .col(integer(ServerConfig::HelperThreshold).default(5))
                    .col(integer(ServerConfig::UnconditionalWinnerCount).default(1))
                    .col(integer(ServerConfig::ConditionalWinnerCount).default(1))
                    .col(string(ServerConfig::LevelThresholds).default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServerConfig {
    Table,
    Id,
    GuildId,
    AdminRoleId,
    GiveawayChannelId,
    ThxInfoChannelId,
    UnconditionalChannelId,
    ConditionalChannelId,
    HelperRoleId,
    HelperThreshold,
    UnconditionalWinnerCount,
    ConditionalWinnerCount,
    LevelThresholds,
}
