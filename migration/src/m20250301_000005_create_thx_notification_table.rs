use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ThxNotification::Table)
                    .if_not_exists()
                    .col(pk_auto(ThxNotification::Id))
                    .col(string_uniq(ThxNotification::MessageId))
                    .col(string(ThxNotification::NotificationMessageId))
                    .col(timestamp(ThxNotification::CreatedAt))
                    .col(timestamp(ThxNotification::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ThxNotification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ThxNotification {
    Table,
    Id,
    MessageId,
    NotificationMessageId,
    CreatedAt,
    UpdatedAt,
}
