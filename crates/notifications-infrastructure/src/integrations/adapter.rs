//! Translation between the integrations service wire format and the
//! domain model.
//!
//! Decoding is lenient on leaf fields (missing id, name or url become
//! empty values) but strict on the endpoint type: anything other than a
//! supported tag is rejected rather than mapped to a partial integration.

use log::{debug, warn};
use std::str::FromStr;

use notifications_domain::integration::{
    AssignedId, HttpMethod, Integration, IntegrationDetails, IntegrationHttp, IntegrationId,
    IntegrationTemplate, IntegrationType,
};
use notifications_domain::shared::DomainError;

use super::types::{
    EndpointProperties, EndpointType, ServerIntegration, ServerIntegrationRequest,
    WebhookProperties,
};

/// Map a domain integration type to its wire tag
pub fn to_endpoint_type(integration_type: IntegrationType) -> EndpointType {
    match integration_type {
        IntegrationType::Webhook => EndpointType::Webhook,
    }
}

/// Decode a single integration returned by the service
pub fn to_integration(server_integration: ServerIntegration) -> Result<Integration, DomainError> {
    let ServerIntegration {
        id,
        name,
        enabled,
        endpoint_type,
        properties,
        ..
    } = server_integration;

    let details = match endpoint_type {
        Some(EndpointType::Webhook) => {
            IntegrationDetails::Webhook(to_integration_http(parse_webhook_properties(properties)?))
        }
        Some(EndpointType::Email) => {
            warn!("Rejecting integration {:?} with unsupported type email", id);
            return Err(DomainError::UnsupportedVariant(
                "Integration with type: email is not supported".to_string(),
            ));
        }
        Some(EndpointType::Unknown(tag)) => {
            warn!("Rejecting integration {:?} with unknown type {}", id, tag);
            return Err(DomainError::UnsupportedVariant(format!(
                "Unexpected type: {tag}"
            )));
        }
        None => {
            warn!("Rejecting integration {:?} without a type", id);
            return Err(DomainError::UnsupportedVariant(
                "Found integration with type undefined".to_string(),
            ));
        }
    };

    Ok(Integration {
        id: IntegrationId::from(id.unwrap_or_default()),
        name: name.unwrap_or_default(),
        is_enabled: enabled.unwrap_or(false),
        details,
    })
}

/// Decode a list of integrations, failing as a whole if any element fails
pub fn to_integrations(
    server_integrations: Option<Vec<ServerIntegration>>,
) -> Result<Vec<Integration>, DomainError> {
    let server_integrations = server_integrations.ok_or_else(|| {
        DomainError::InvalidInput("Expected a list of integrations, found none".to_string())
    })?;

    let integrations = server_integrations
        .into_iter()
        .map(to_integration)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Decoded {} integrations", integrations.len());
    Ok(integrations)
}

/// Encode an integration (persisted or new) as a create/update request
pub fn to_server_integration_request<I: AssignedId>(
    integration: &IntegrationTemplate<I>,
) -> ServerIntegrationRequest {
    ServerIntegrationRequest {
        id: integration
            .assigned_id()
            .map(|id| id.as_str().to_string()),
        name: integration.name.clone(),
        enabled: integration.is_enabled,
        endpoint_type: to_endpoint_type(integration.integration_type()),
        description: String::new(),
        properties: to_endpoint_properties(&integration.details),
    }
}

fn to_endpoint_properties(details: &IntegrationDetails) -> EndpointProperties {
    match details {
        IntegrationDetails::Webhook(http) => EndpointProperties::Webhook(WebhookProperties {
            url: Some(http.url.clone()),
            method: Some(http.method.as_str().to_string()),
            disable_ssl_verification: Some(!http.ssl_verification_enabled),
            secret_token: http.secret_token.clone(),
        }),
    }
}

fn parse_webhook_properties(
    properties: serde_json::Value,
) -> Result<WebhookProperties, DomainError> {
    if properties.is_null() {
        return Ok(WebhookProperties::default());
    }

    serde_json::from_value(properties).map_err(|e| {
        DomainError::Deserialization(format!("Invalid webhook properties: {}", e))
    })
}

fn to_integration_http(properties: WebhookProperties) -> IntegrationHttp {
    IntegrationHttp {
        url: properties.url.unwrap_or_default(),
        method: properties
            .method
            .as_deref()
            .map(to_http_method)
            .unwrap_or_default(),
        ssl_verification_enabled: !properties.disable_ssl_verification.unwrap_or(false),
        secret_token: properties.secret_token.filter(|token| !token.is_empty()),
    }
}

fn to_http_method(raw: &str) -> HttpMethod {
    HttpMethod::from_str(raw.trim()).unwrap_or_else(|_| {
        warn!("Unsupported webhook method {:?}, using {}", raw, HttpMethod::default());
        HttpMethod::default()
    })
}
