use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "participant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub giveaway_id: i32,
    pub guild_id: String,
    pub user_id: String,
    pub user_name: String,
    pub channel_id: String,
    #[sea_orm(unique)]
    pub message_id: String,
    pub is_accepted: Option<bool>,
    pub accept_user_id: Option<String>,
    pub accept_user_name: Option<String>,
    pub accept_time: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::giveaway::Entity",
        from = "Column::GiveawayId",
        to = "super::giveaway::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Giveaway,
}

impl Related<super::giveaway::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Giveaway.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
