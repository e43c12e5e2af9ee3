use url::Url;

use crate::error::{config::ConfigError, AppError};

/// Daily at 20:00 UTC, in `tokio-cron-scheduler`'s six-field format.
const DEFAULT_GIVEAWAY_CRON: &str = "0 0 20 * * *";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    pub voucher_api_url: Url,
    pub voucher_api_token: String,

    /// Schedule on which every open giveaway is closed and a new cycle opened.
    pub giveaway_cron: String,
    /// Schedule for status announcements; unset disables them.
    pub status_cron: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let voucher_api_url = required("VOUCHER_API_URL")?;
        let voucher_api_url =
            Url::parse(&voucher_api_url).map_err(|e| ConfigError::InvalidEnvVar {
                name: "VOUCHER_API_URL".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            voucher_api_url,
            voucher_api_token: required("VOUCHER_API_TOKEN")?,
            giveaway_cron: std::env::var("GIVEAWAY_CRON")
                .unwrap_or_else(|_| DEFAULT_GIVEAWAY_CRON.to_string()),
            status_cron: std::env::var("STATUS_CRON")
                .ok()
                .filter(|cron| !cron.trim().is_empty()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
