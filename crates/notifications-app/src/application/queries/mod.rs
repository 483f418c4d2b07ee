mod integration_queries;

pub use integration_queries::IntegrationQueryService;
