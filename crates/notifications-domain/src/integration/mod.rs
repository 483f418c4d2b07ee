mod aggregate;
mod repository;
mod value_objects;


pub use aggregate::{AssignedId, Integration, IntegrationTemplate, NewIntegration};
pub use repository::IntegrationRepository;
pub use value_objects::{
    HttpMethod, IntegrationDetails, IntegrationHttp, IntegrationId, IntegrationType,
};
