use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "server_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub admin_role_id: Option<String>,
    pub giveaway_channel_id: Option<String>,
    pub thx_info_channel_id: Option<String>,
    pub unconditional_channel_id: Option<String>,
    pub conditional_channel_id: Option<String>,
    pub helper_role_id: Option<String>,
    pub helper_threshold: i32,
    pub unconditional_winner_count: i32,
    pub conditional_winner_count: i32,
    /// Comma-separated ascending accepted-thx counts, empty when unset.
    pub level_thresholds: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
