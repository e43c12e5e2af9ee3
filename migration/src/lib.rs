pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_server_config_table;
mod m20250301_000002_create_giveaway_table;
mod m20250301_000003_create_participant_table;
mod m20250301_000004_create_participant_candidate_table;
mod m20250301_000005_create_thx_notification_table;
mod m20250302_000006_create_blacklist_tables;
mod m20250303_000007_create_status_template_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_server_config_table::Migration),
            Box::new(m20250301_000002_create_giveaway_table::Migration),
            Box::new(m20250301_000003_create_participant_table::Migration),
            Box::new(m20250301_000004_create_participant_candidate_table::Migration),
            Box::new(m20250301_000005_create_thx_notification_table::Migration),
            Box::new(m20250302_000006_create_blacklist_tables::Migration),
            Box::new(m20250303_000007_create_status_template_table::Migration),
        ]
    }
}
