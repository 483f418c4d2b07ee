use log::debug;
use std::sync::Arc;

use notifications_domain::integration::{Integration, IntegrationId, IntegrationRepository};
use notifications_domain::shared::DomainError;

/// Read-side access to integrations
pub struct IntegrationQueryService {
    integration_repo: Arc<dyn IntegrationRepository>,
}

impl IntegrationQueryService {
    pub fn new(integration_repo: Arc<dyn IntegrationRepository>) -> Self {
        Self { integration_repo }
    }

    /// All integrations, in the order the service returns them
    pub async fn list(&self) -> Result<Vec<Integration>, DomainError> {
        let integrations = self.integration_repo.find_all().await?;
        debug!("Loaded {} integrations", integrations.len());
        Ok(integrations)
    }

    pub async fn get(&self, integration_id: &str) -> Result<Integration, DomainError> {
        let id = IntegrationId::from_string(integration_id);
        self.integration_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound(integration_id.to_string()))
    }
}
