use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParticipantCandidate::Table)
                    .if_not_exists()
                    .col(pk_auto(ParticipantCandidate::Id))
                    .col(string(ParticipantCandidate::GuildId))
                    .col(string(ParticipantCandidate::CandidateId))
                    .col(string(ParticipantCandidate::CandidateName))
                    .col(string(ParticipantCandidate::CandidateApproverId))
                    .col(string(ParticipantCandidate::CandidateApproverName))
                    .col(string(ParticipantCandidate::ChannelId))
                    .col(string_uniq(ParticipantCandidate::MessageId))
                    .col(boolean_null(ParticipantCandidate::IsAccepted))
                    .col(timestamp_null(ParticipantCandidate::AcceptTime))
                    .col(
                        timestamp(ParticipantCandidate::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParticipantCandidate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ParticipantCandidate {
    Table,
    Id,
    GuildId,
    CandidateId,
    CandidateName,
    CandidateApproverId,
    CandidateApproverName,
    ChannelId,
    MessageId,
    IsAccepted,
    AcceptTime,
    CreatedAt,
}
