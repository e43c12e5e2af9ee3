use crate::{
    data::server_config::ServerConfigRepository,
    error::{settings::SettingsError, AppError},
    model::server_config::{UpdateServerConfigParam, MAX_HELPER_THRESHOLD},
    service::server_config::ServerConfigService,
};
use test_utils::{builder::TestBuilder, factory::server_config::ServerConfigFactory};
