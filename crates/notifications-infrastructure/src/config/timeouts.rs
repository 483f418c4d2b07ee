use std::time::Duration;

/// Timeouts applied to calls against the integrations service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Whole-request timeout
    pub http_request: Duration,

    /// TCP/TLS connect timeout
    pub connect: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        GLOBAL_TIMEOUT_CONFIG.clone()
    }
}

impl TimeoutConfig {
    /// Get the global timeout configuration
    pub fn global() -> &'static Self {
        &GLOBAL_TIMEOUT_CONFIG
    }
}

static GLOBAL_TIMEOUT_CONFIG: TimeoutConfig = TimeoutConfig {
    http_request: Duration::from_secs(30),
    connect: Duration::from_secs(10),
};
