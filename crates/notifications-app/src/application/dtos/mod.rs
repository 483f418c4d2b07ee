use serde::{Deserialize, Serialize};

use notifications_domain::integration::{HttpMethod, IntegrationType};

// ============================================================
// Integration DTOs
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntegrationInput {
    pub name: String,
    #[serde(rename = "type")]
    pub integration_type: IntegrationType,
    pub url: String,
    pub method: Option<HttpMethod>,
    pub ssl_verification_enabled: Option<bool>,
    pub secret_token: Option<String>,
    pub is_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIntegrationInput {
    pub id: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub method: Option<HttpMethod>,
    pub ssl_verification_enabled: Option<bool>,
    /// An empty string clears the token
    pub secret_token: Option<String>,
    pub is_enabled: Option<bool>,
}
