use serde::{Deserialize, Serialize};

use super::value_objects::{IntegrationDetails, IntegrationHttp, IntegrationId, IntegrationType};
use crate::shared::DomainError;

/// Abstracts over the id slot of an integration.
///
/// Persisted integrations always carry an id; new ones may not have one
/// until the remote service assigns it.
pub trait AssignedId {
    fn assigned_id(&self) -> Option<&IntegrationId>;
}

impl AssignedId for IntegrationId {
    fn assigned_id(&self) -> Option<&IntegrationId> {
        Some(self)
    }
}

impl AssignedId for Option<IntegrationId> {
    fn assigned_id(&self) -> Option<&IntegrationId> {
        self.as_ref()
    }
}

/// Integration shared by persisted and not-yet-persisted entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationTemplate<I> {
    pub id: I,
    pub name: String,
    pub is_enabled: bool,
    #[serde(flatten)]
    pub details: IntegrationDetails,
}

/// Integration known to the remote service
pub type Integration = IntegrationTemplate<IntegrationId>;

/// Integration that may not have been assigned an id yet
pub type NewIntegration = IntegrationTemplate<Option<IntegrationId>>;

impl<I: AssignedId> IntegrationTemplate<I> {
    pub fn integration_type(&self) -> IntegrationType {
        self.details.integration_type()
    }

    pub fn assigned_id(&self) -> Option<&IntegrationId> {
        self.id.assigned_id()
    }

    /// Webhook fields, if this is a webhook integration
    pub fn webhook(&self) -> Option<&IntegrationHttp> {
        match &self.details {
            IntegrationDetails::Webhook(http) => Some(http),
        }
    }

    pub fn enable(&mut self) {
        self.is_enabled = true;
    }

    pub fn disable(&mut self) {
        self.is_enabled = false;
    }

    /// Validate before sending to the remote service
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Integration name cannot be empty".to_string(),
            ));
        }

        self.details.validate()
    }
}

impl NewIntegration {
    /// Create a new, enabled webhook integration
    pub fn new_webhook(name: impl Into<String>, http: IntegrationHttp) -> Self {
        Self {
            id: None,
            name: name.into(),
            is_enabled: true,
            details: IntegrationDetails::Webhook(http),
        }
    }

    /// Attach the id assigned by the remote service
    pub fn with_id(self, id: IntegrationId) -> Integration {
        Integration {
            id,
            name: self.name,
            is_enabled: self.is_enabled,
            details: self.details,
        }
    }
}

impl Integration {
    pub fn id(&self) -> &IntegrationId {
        &self.id
    }

    pub fn into_new(self) -> NewIntegration {
        NewIntegration {
            id: Some(self.id),
            name: self.name,
            is_enabled: self.is_enabled,
            details: self.details,
        }
    }
}
