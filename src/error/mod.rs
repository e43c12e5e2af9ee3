//! Error types for the bot.
//!
//! `AppError` is the top-level error type returned by services, the scheduler and
//! startup code. Domain-specific failures live in their own modules and are wrapped
//! through `#[from]` conversions. Repositories return `sea_orm::DbErr` directly and
//! services convert with `?`.
//!
//! Rejected inputs (a non-approver reacting, a self-thx, a nomination resolved twice)
//! are not errors. Services report them as outcome enums so dispatch can decide what the
//! user sees.

pub mod config;
pub mod internal;
pub mod settings;

use thiserror::Error;

use crate::error::{
    config::ConfigError,
    internal::InternalError,
    settings::{SettingsError, StatusTemplateError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal error indicating a bug or corrupted stored data.
    #[error(transparent)]
    InternalError(#[from] InternalError),

    /// A settings change was refused before anything was stored.
    #[error(transparent)]
    SettingsErr(#[from] SettingsError),

    /// A status template was refused before anything was stored.
    #[error(transparent)]
    StatusTemplateErr(#[from] StatusTemplateError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// The voucher service did not hand out a code.
    ///
    /// A close attempt that hits this error leaves the giveaway open for the next cycle.
    #[error("Voucher service failed: {0}")]
    Voucher(String),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
