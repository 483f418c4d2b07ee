use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::sleep;

use crate::config::{RetryConfig, TimeoutConfig};

pub const USER_AGENT: &str = concat!("notifications-console/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client with retry support
pub struct HttpClient {
    pub(crate) client: Client,
    pub(crate) retry_config: RetryConfig,
}

impl HttpClient {
    pub fn new(timeouts: &TimeoutConfig, retry_config: RetryConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeouts.http_request)
            .connect_timeout(timeouts.connect)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            retry_config,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Run `attempt_fn`, retrying transient transport failures (see
    /// [`is_retryable_error`]) with exponential backoff until the retry
    /// budget is spent.
    pub async fn execute_with_retry<F, Fut, T>(
        &self,
        operation: &str,
        mut attempt_fn: F,
    ) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let max_attempts = self.retry_config.max_retries + 1;
        let mut delay_ms = self.retry_config.initial_backoff_ms;
        let mut attempt = 1;

        loop {
            let error = match attempt_fn().await {
                Ok(value) => {
                    if attempt > 1 {
                        debug!("{operation}: recovered on attempt {attempt}/{max_attempts}");
                    }
                    return Ok(value);
                }
                Err(error) => error,
            };

            if attempt >= max_attempts || !is_retryable_error(&error) {
                if attempt > 1 {
                    warn!("{operation}: giving up after {attempt} attempts");
                }
                return Err(error);
            }

            warn!(
                "{operation}: transient failure on attempt {attempt}/{max_attempts}, next try in {delay_ms}ms: {error}"
            );
            sleep(Duration::from_millis(delay_ms)).await;
            delay_ms = self.retry_config.next_backoff_ms(delay_ms);
            attempt += 1;
        }
    }
}

/// Check if an error is retryable
pub fn is_retryable_error(error: &anyhow::Error) -> bool {
    if let Some(reqwest_err) = error.downcast_ref::<reqwest::Error>() {
        if reqwest_err.is_connect() || reqwest_err.is_timeout() {
            return true;
        }

        if let Some(status) = reqwest_err.status() {
            return is_retryable_status(status);
        }
    }

    false
}

pub fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}
