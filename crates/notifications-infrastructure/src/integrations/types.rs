use serde::{Deserialize, Serialize};

/// Endpoint type tag used by the remote integrations service.
///
/// Deserializing never fails: tags this build does not know about, and
/// tags that are not strings at all, are kept in `Unknown` so the adapter
/// can reject them explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "String")]
pub enum EndpointType {
    Webhook,
    Email,
    Unknown(String),
}

impl EndpointType {
    pub fn as_str(&self) -> &str {
        match self {
            EndpointType::Webhook => "webhook",
            EndpointType::Email => "email",
            EndpointType::Unknown(tag) => tag,
        }
    }
}

impl From<String> for EndpointType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "webhook" => EndpointType::Webhook,
            "email" => EndpointType::Email,
            _ => EndpointType::Unknown(tag),
        }
    }
}

impl From<serde_json::Value> for EndpointType {
    fn from(tag: serde_json::Value) -> Self {
        match tag {
            serde_json::Value::String(tag) => EndpointType::from(tag),
            other => EndpointType::Unknown(other.to_string()),
        }
    }
}

impl From<EndpointType> for String {
    fn from(endpoint_type: EndpointType) -> Self {
        endpoint_type.as_str().to_string()
    }
}

impl std::fmt::Display for EndpointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Integration as returned by the remote service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerIntegration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<EndpointType>,
    /// Raw properties bag; its shape depends on `endpoint_type`
    #[serde(default)]
    pub properties: serde_json::Value,
}

/// Properties bag of a `webhook` endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookProperties {
    #[serde(default)]
    pub url: Option<String>,
    /// Free-form upstream; resolved leniently by the adapter
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub disable_ssl_verification: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<String>,
}

/// Typed properties bag, one variant per supported endpoint type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EndpointProperties {
    Webhook(WebhookProperties),
}

/// Body sent to the remote service on create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerIntegrationRequest {
    /// Absent for integrations the service has not created yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub enabled: bool,
    #[serde(rename = "type")]
    pub endpoint_type: EndpointType,
    pub description: String,
    pub properties: EndpointProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_type_keeps_unknown_tags() {
        let parsed: EndpointType = serde_json::from_value(json!("im-not-a-valid-type")).unwrap();
        assert_eq!(
            parsed,
            EndpointType::Unknown("im-not-a-valid-type".to_string())
        );
        assert_eq!(parsed.as_str(), "im-not-a-valid-type");
    }

    #[test]
    fn test_endpoint_type_keeps_non_string_tags() {
        let parsed: ServerIntegration = serde_json::from_value(json!({
            "id": "meep",
            "type": 5
        }))
        .unwrap();

        assert_eq!(parsed.endpoint_type, Some(EndpointType::Unknown("5".to_string())));
    }

    #[test]
    fn test_server_integration_tolerates_missing_fields() {
        let parsed: ServerIntegration = serde_json::from_value(json!({
            "id": "meep",
            "type": null
        }))
        .unwrap();

        assert_eq!(parsed.id.as_deref(), Some("meep"));
        assert_eq!(parsed.endpoint_type, None);
        assert!(parsed.properties.is_null());
        assert_eq!(parsed.enabled, None);
    }

    #[test]
    fn test_request_omits_missing_id_and_token() {
        let request = ServerIntegrationRequest {
            id: None,
            name: "meep".to_string(),
            enabled: false,
            endpoint_type: EndpointType::Webhook,
            description: String::new(),
            properties: EndpointProperties::Webhook(WebhookProperties {
                url: Some("https://myurl.com".to_string()),
                method: Some("GET".to_string()),
                disable_ssl_verification: Some(false),
                secret_token: None,
            }),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "meep",
                "enabled": false,
                "type": "webhook",
                "description": "",
                "properties": {
                    "url": "https://myurl.com",
                    "method": "GET",
                    "disable_ssl_verification": false
                }
            })
        );
    }
}
