use crate::{
    data::blacklist::BlacklistRepository, error::AppError, model::blacklist::BlacklistKind,
};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod remove;
