use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_giveaway_table::Giveaway;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Participant::Table)
                    .if_not_exists()
                    .col(pk_auto(Participant::Id))
                    .col(integer(Participant::GiveawayId))
                    .col(string(Participant::GuildId))
                    .col(string(Participant::UserId))
                    .col(string(Participant::UserName))
                    .col(string(Participant::ChannelId))
                    .col(string_uniq(Participant::MessageId))
                    .col(boolean_null(Participant::IsAccepted))
                    .col(string_null(Participant::AcceptUserId))
                    .col(string_null(Participant::AcceptUserName))
                    .col(timestamp_null(Participant::AcceptTime))
                    .col(
                        timestamp(Participant::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participant_giveaway_id")
                            .from(Participant::Table, Participant::GiveawayId)
                            .to(Giveaway::Table, Giveaway::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_participant_giveaway_id")
                    .table(Participant::Table)
                    .col(Participant::GiveawayId)
                    .to_owned(),
            )
            .await?;

        // Accepted thx counts are grouped per guild and user
        manager
            .create_index(
                Index::create()
                    .name("idx_participant_guild_id_user_id")
                    .table(Participant::Table)
                    .col(Participant::GuildId)
                    .col(Participant::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_participant_guild_id_user_id")
                    .table(Participant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_participant_giveaway_id")
                    .table(Participant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Participant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Participant {
    Table,
    Id,
    GiveawayId,
    GuildId,
    UserId,
    UserName,
    ChannelId,
    MessageId,
    IsAccepted,
    AcceptUserId,
    AcceptUserName,
    AcceptTime,
    CreatedAt,
}
