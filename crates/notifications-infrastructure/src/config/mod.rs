mod retry;
mod timeouts;

pub use retry::RetryConfig;
pub use timeouts::TimeoutConfig;

use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use notifications_domain::shared::DomainError;

pub const API_URL_ENV: &str = "NOTIFICATIONS_API_URL";
pub const API_TOKEN_ENV: &str = "NOTIFICATIONS_API_TOKEN";
pub const HTTP_TIMEOUT_ENV: &str = "NOTIFICATIONS_HTTP_TIMEOUT_SECS";
pub const LOG_DIR_ENV: &str = "NOTIFICATIONS_LOG_DIR";

pub const DEFAULT_API_URL: &str = "http://localhost:8085/api/integrations/v1.0/";

/// Connection settings for the remote integrations service
#[derive(Debug, Clone)]
pub struct IntegrationsConfig {
    /// Base URL, always ending in `/`
    pub base_url: Url,
    /// Bearer token sent with every request
    pub auth_token: Option<String>,
    pub timeouts: TimeoutConfig,
    pub retry: RetryConfig,
}

impl IntegrationsConfig {
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            auth_token: None,
            timeouts: TimeoutConfig::default(),
            retry: RetryConfig::default(),
        })
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut config = Self::new(&base_url)?;

        config.auth_token = lookup(API_TOKEN_ENV).filter(|token| !token.trim().is_empty());

        if let Some(raw) = lookup(HTTP_TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                DomainError::InvalidInput(format!("{HTTP_TIMEOUT_ENV} must be a number of seconds, got {raw}"))
            })?;
            if secs == 0 {
                return Err(DomainError::InvalidInput(format!(
                    "{HTTP_TIMEOUT_ENV} must be greater than 0"
                )));
            }
            config.timeouts.http_request = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

fn normalize_base_url(raw: &str) -> Result<Url, DomainError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash)
        .map_err(|e| DomainError::InvalidInput(format!("Invalid integrations API url {trimmed}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(DomainError::InvalidInput(format!(
            "Integrations API url must use http or https, got {scheme}"
        ))),
    }
}

/// Resolve the log directory from the given lookup or the platform data dir
pub fn log_dir_from_lookup<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(LOG_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
        return PathBuf::from(dir);
    }

    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("notifications-console")
        .join("logs")
}
