use crate::{
    data::server_config::ServerConfigRepository,
    error::AppError,
    model::server_config::{
        UpdateServerConfigParam, DEFAULT_HELPER_THRESHOLD, DEFAULT_WINNER_COUNT,
        MAX_HELPER_THRESHOLD,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
