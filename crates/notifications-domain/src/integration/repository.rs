use async_trait::async_trait;

use super::aggregate::{Integration, NewIntegration};
use super::value_objects::IntegrationId;
use crate::shared::DomainError;

/// Integration repository trait
///
/// Backed by the remote integrations service; implementations translate
/// between its wire representation and the domain model.
#[async_trait]
pub trait IntegrationRepository: Send + Sync {
    /// Find all integrations, in the order the service returns them
    async fn find_all(&self) -> Result<Vec<Integration>, DomainError>;

    /// Find an integration by ID
    async fn find_by_id(&self, id: &IntegrationId) -> Result<Option<Integration>, DomainError>;

    /// Create an integration and return it with its assigned id
    async fn create(&self, integration: &NewIntegration) -> Result<Integration, DomainError>;

    /// Replace an existing integration
    async fn update(&self, integration: &Integration) -> Result<Integration, DomainError>;

    /// Delete an integration by ID
    async fn delete(&self, id: &IntegrationId) -> Result<(), DomainError>;
}
