use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::{define_id, DomainError};

define_id!(IntegrationId);

/// Integration type enumeration
///
/// Closed set of variants the console can represent end-to-end. Every
/// `match` over it is exhaustive so that a new variant cannot slip
/// through the adapters unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegrationType {
    /// Outbound HTTP webhook
    #[serde(rename = "WEBHOOK")]
    Webhook,
}

impl IntegrationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationType::Webhook => "WEBHOOK",
        }
    }
}

impl FromStr for IntegrationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WEBHOOK" => Ok(IntegrationType::Webhook),
            _ => Err(DomainError::UnsupportedVariant(format!(
                "Unknown integration type: {s}"
            ))),
        }
    }
}

impl fmt::Display for IntegrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// HTTP method used when calling a webhook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            _ => Err(DomainError::InvalidInput(format!(
                "Invalid HTTP method: {s}. Must be 'GET' or 'POST'"
            ))),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Webhook-specific integration fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationHttp {
    pub url: String,
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(default = "default_ssl_verification")]
    pub ssl_verification_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<String>,
}

fn default_ssl_verification() -> bool {
    true
}

impl IntegrationHttp {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::default(),
            ssl_verification_enabled: true,
            secret_token: None,
        }
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_ssl_verification(mut self, enabled: bool) -> Self {
        self.ssl_verification_enabled = enabled;
        self
    }

    pub fn with_secret_token(mut self, token: impl Into<String>) -> Self {
        self.secret_token = Some(token.into());
        self
    }

    /// Validate webhook fields before they are sent upstream
    pub fn validate(&self) -> Result<(), DomainError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(DomainError::Validation(
                "Webhook url cannot be empty".to_string(),
            ));
        }

        let parsed = url::Url::parse(url)
            .map_err(|e| DomainError::Validation(format!("Invalid webhook url {url}: {e}")))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DomainError::Validation(format!(
                "Webhook url must use http or https, got {scheme}"
            ))),
        }
    }
}

/// Variant-specific integration fields, tagged by `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IntegrationDetails {
    #[serde(rename = "WEBHOOK")]
    Webhook(IntegrationHttp),
}

impl IntegrationDetails {
    pub fn integration_type(&self) -> IntegrationType {
        match self {
            IntegrationDetails::Webhook(_) => IntegrationType::Webhook,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            IntegrationDetails::Webhook(http) => http.validate(),
        }
    }
}
