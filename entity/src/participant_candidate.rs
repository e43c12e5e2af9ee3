use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "participant_candidate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub candidate_id: String,
    pub candidate_name: String,
    pub candidate_approver_id: String,
    pub candidate_approver_name: String,
    pub channel_id: String,
    #[sea_orm(unique)]
    pub message_id: String,
    pub is_accepted: Option<bool>,
    pub accept_time: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
