// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod integration;
pub mod shared;

// Re-exports for convenience
pub use integration::{Integration, IntegrationId, IntegrationType, NewIntegration};
pub use shared::DomainError;
