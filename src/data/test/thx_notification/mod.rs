use crate::{data::thx_notification::ThxNotificationRepository, error::AppError};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;
