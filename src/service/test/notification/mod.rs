use crate::{
    data::thx_notification::ThxNotificationRepository, error::AppError,
    gateway::OutboundMessage, service::notification::ThxNotificationService,
};
use test_utils::{builder::TestBuilder, factory::server_config::ServerConfigFactory};

use super::mock_gateway;

mod upsert;
