use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blacklist::Table)
                    .if_not_exists()
                    .col(pk_auto(Blacklist::Id))
                    .col(string(Blacklist::GuildId))
                    .col(string(Blacklist::UserId))
                    .col(string(Blacklist::BlacklistedById))
                    .col(
                        timestamp(Blacklist::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blacklist_unique")
                    .table(Blacklist::Table)
                    .col(Blacklist::GuildId)
                    .col(Blacklist::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HelperBlacklist::Table)
                    .if_not_exists()
                    .col(pk_auto(HelperBlacklist::Id))
                    .col(string(HelperBlacklist::GuildId))
                    .col(string(HelperBlacklist::UserId))
                    .col(string(HelperBlacklist::BlacklistedById))
                    .col(
                        timestamp(HelperBlacklist::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_helper_blacklist_unique")
                    .table(HelperBlacklist::Table)
                    .col(HelperBlacklist::GuildId)
                    .col(HelperBlacklist::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HelperBlacklist::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Blacklist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blacklist {
    Table,
    Id,
    GuildId,
    UserId,
    BlacklistedById,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HelperBlacklist {
    Table,
    Id,
    GuildId,
    UserId,
    BlacklistedById,
    CreatedAt,
}
