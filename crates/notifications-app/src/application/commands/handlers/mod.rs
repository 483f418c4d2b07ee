mod integration_handlers;


pub use integration_handlers::{
    CreateIntegrationHandler, DeleteIntegrationHandler, ToggleIntegrationHandler,
    UpdateIntegrationHandler,
};
