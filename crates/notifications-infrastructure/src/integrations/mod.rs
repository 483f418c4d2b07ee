pub mod adapter;
mod repository;
mod types;

pub use adapter::{to_integration, to_integrations, to_server_integration_request};
pub use repository::HttpIntegrationRepository;
pub use types::{
    EndpointProperties, EndpointType, ServerIntegration, ServerIntegrationRequest,
    WebhookProperties,
};
