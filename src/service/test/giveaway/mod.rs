use std::sync::Arc;

use crate::{
    data::giveaway::GiveawayRepository,
    error::AppError,
    model::giveaway::CloseOutcome,
    service::giveaway::GiveawayService,
    voucher::mock::MockVoucherClient,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, giveaway::GiveawayFactory, server_config::ServerConfigFactory},
};

use super::mock_gateway;

mod batch_close_due;
mod close;
mod ensure_open;
mod pick_winner;
