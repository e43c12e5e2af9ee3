//! Client for the external voucher service that hands out giveaway codes.
//!
//! A code is requested once per closed giveaway that has a winner. The request has a
//! fixed timeout and is retried exactly once; if both attempts fail the close is rolled
//! back and the giveaway stays open for the next cycle.

use std::time::Duration;

use serde::Deserialize;
use serenity::async_trait;
use url::Url;

use crate::error::AppError;

/// Per-attempt timeout for a voucher request.
pub const VOUCHER_TIMEOUT: Duration = Duration::from_secs(10);

/// Attempts made per code request, the first try plus one retry.
const VOUCHER_ATTEMPTS: usize = 2;

/// Source of voucher codes.
#[async_trait]
pub trait VoucherClient: Send + Sync {
    /// Requests a single unused voucher code.
    ///
    /// # Returns
    /// - `Ok(String)` - A non-empty voucher code
    /// - `Err(AppError::Voucher)` - Both attempts failed or returned no code
    async fn request_code(&self) -> Result<String, AppError>;
}

#[derive(Debug, Deserialize)]
struct VoucherResponse {
    code: String,
}

/// Voucher client calling the service over HTTP.
pub struct HttpVoucherClient {
    http: reqwest::Client,
    url: Url,
    token: String,
}

impl HttpVoucherClient {
    /// Creates a voucher client.
    ///
    /// # Arguments
    /// - `http` - Shared reqwest client
    /// - `url` - Endpoint returning `{"code": "..."}` on POST
    /// - `token` - Bearer token for the endpoint
    pub fn new(http: reqwest::Client, url: Url, token: String) -> Self {
        Self { http, url, token }
    }

    async fn try_request(&self) -> Result<String, AppError> {
        let response = self
            .http
            .post(self.url.clone())
            .bearer_auth(&self.token)
            .timeout(VOUCHER_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json::<VoucherResponse>()
            .await?;

        let code = response.code.trim().to_string();
        if code.is_empty() {
            return Err(AppError::Voucher("service returned an empty code".to_string()));
        }

        Ok(code)
    }
}

#[async_trait]
impl VoucherClient for HttpVoucherClient {
    async fn request_code(&self) -> Result<String, AppError> {
        let mut last_error = None;

        for attempt in 1..=VOUCHER_ATTEMPTS {
            match self.try_request().await {
                Ok(code) => return Ok(code),
                Err(e) => {
                    tracing::warn!("Voucher request attempt {} failed: {}", attempt, e);
                    last_error = Some(e);
                }
            }
        }

        Err(AppError::Voucher(
            last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no attempt made".to_string()),
        ))
    }
}
