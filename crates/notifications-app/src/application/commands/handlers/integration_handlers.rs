use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::integration_commands::*;
use notifications_domain::integration::{
    Integration, IntegrationDetails, IntegrationHttp, IntegrationId, IntegrationRepository,
    IntegrationType, NewIntegration,
};
use notifications_domain::shared::DomainError;

async fn load(
    repo: &Arc<dyn IntegrationRepository>,
    integration_id: &str,
) -> Result<Integration, DomainError> {
    let id = IntegrationId::from_string(integration_id);
    repo.find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::NotFound(integration_id.to_string()))
}

/// Create integration command handler
pub struct CreateIntegrationHandler {
    integration_repo: Arc<dyn IntegrationRepository>,
}

impl CreateIntegrationHandler {
    pub fn new(integration_repo: Arc<dyn IntegrationRepository>) -> Self {
        Self { integration_repo }
    }
}

#[async_trait]
impl CommandHandler<CreateIntegrationCommand> for CreateIntegrationHandler {
    type Result = CreateIntegrationResult;

    async fn handle(&self, cmd: CreateIntegrationCommand) -> Result<Self::Result, DomainError> {
        let input = cmd.input;
        info!("Creating integration: {} ({})", input.name, input.integration_type);

        let details = match input.integration_type {
            IntegrationType::Webhook => {
                let mut http = IntegrationHttp::new(input.url.trim());
                if let Some(method) = input.method {
                    http = http.with_method(method);
                }
                if let Some(enabled) = input.ssl_verification_enabled {
                    http = http.with_ssl_verification(enabled);
                }
                if let Some(token) = input.secret_token.filter(|t| !t.is_empty()) {
                    http = http.with_secret_token(token);
                }
                IntegrationDetails::Webhook(http)
            }
        };

        let integration = NewIntegration {
            id: None,
            name: input.name.trim().to_string(),
            is_enabled: input.is_enabled.unwrap_or(true),
            details,
        };
        integration.validate()?;

        let created = self.integration_repo.create(&integration).await?;

        info!("Integration created: {}", created.id());
        Ok(created)
    }
}

/// Update integration command handler
pub struct UpdateIntegrationHandler {
    integration_repo: Arc<dyn IntegrationRepository>,
}

impl UpdateIntegrationHandler {
    pub fn new(integration_repo: Arc<dyn IntegrationRepository>) -> Self {
        Self { integration_repo }
    }
}

#[async_trait]
impl CommandHandler<UpdateIntegrationCommand> for UpdateIntegrationHandler {
    type Result = UpdateIntegrationResult;

    async fn handle(&self, cmd: UpdateIntegrationCommand) -> Result<Self::Result, DomainError> {
        let input = cmd.input;
        info!("Updating integration: {}", input.id);

        let mut integration = load(&self.integration_repo, &input.id).await?;

        if let Some(name) = input.name {
            integration.name = name.trim().to_string();
        }

        if let Some(enabled) = input.is_enabled {
            if enabled {
                integration.enable();
            } else {
                integration.disable();
            }
        }

        match &mut integration.details {
            IntegrationDetails::Webhook(http) => {
                if let Some(url) = input.url {
                    http.url = url.trim().to_string();
                }
                if let Some(method) = input.method {
                    http.method = method;
                }
                if let Some(enabled) = input.ssl_verification_enabled {
                    http.ssl_verification_enabled = enabled;
                }
                if let Some(token) = input.secret_token {
                    http.secret_token = Some(token).filter(|t| !t.is_empty());
                }
            }
        }

        integration.validate()?;

        let updated = self.integration_repo.update(&integration).await?;

        info!("Integration updated: {}", updated.id());
        Ok(updated)
    }
}

/// Delete integration command handler
pub struct DeleteIntegrationHandler {
    integration_repo: Arc<dyn IntegrationRepository>,
}

impl DeleteIntegrationHandler {
    pub fn new(integration_repo: Arc<dyn IntegrationRepository>) -> Self {
        Self { integration_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteIntegrationCommand> for DeleteIntegrationHandler {
    type Result = DeleteIntegrationResult;

    async fn handle(&self, cmd: DeleteIntegrationCommand) -> Result<Self::Result, DomainError> {
        info!("Deleting integration: {}", cmd.integration_id);

        let id = IntegrationId::from_string(&cmd.integration_id);
        self.integration_repo.delete(&id).await?;

        info!("Integration deleted: {}", cmd.integration_id);
        Ok(())
    }
}

/// Toggle integration command handler
pub struct ToggleIntegrationHandler {
    integration_repo: Arc<dyn IntegrationRepository>,
}

impl ToggleIntegrationHandler {
    pub fn new(integration_repo: Arc<dyn IntegrationRepository>) -> Self {
        Self { integration_repo }
    }
}

#[async_trait]
impl CommandHandler<ToggleIntegrationCommand> for ToggleIntegrationHandler {
    type Result = ToggleIntegrationResult;

    async fn handle(&self, cmd: ToggleIntegrationCommand) -> Result<Self::Result, DomainError> {
        info!(
            "Toggling integration {} to enabled={}",
            cmd.integration_id, cmd.enabled
        );

        let mut integration = load(&self.integration_repo, &cmd.integration_id).await?;

        if integration.is_enabled == cmd.enabled {
            return Ok(integration);
        }

        if cmd.enabled {
            integration.enable();
        } else {
            integration.disable();
        }

        self.integration_repo.update(&integration).await
    }
}
