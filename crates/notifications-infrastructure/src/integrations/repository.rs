use anyhow::Context;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Method, Response, StatusCode};
use url::Url;

use notifications_domain::integration::{
    Integration, IntegrationId, IntegrationRepository, NewIntegration,
};
use notifications_domain::shared::DomainError;

use super::adapter::{to_integration, to_integrations, to_server_integration_request};
use super::types::{ServerIntegration, ServerIntegrationRequest};
use crate::config::IntegrationsConfig;
use crate::http::{is_retryable_status, HttpClient};

const ENDPOINTS_PATH: &str = "endpoints";

/// Integration repository backed by the remote integrations REST service
pub struct HttpIntegrationRepository {
    http: HttpClient,
    base_url: Url,
    auth_token: Option<String>,
}

impl HttpIntegrationRepository {
    pub fn new(config: &IntegrationsConfig) -> anyhow::Result<Self> {
        let http = HttpClient::new(&config.timeouts, config.retry.clone())
            .context("Failed to create integrations client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    fn endpoints_url(&self) -> Result<Url, DomainError> {
        self.base_url.join(ENDPOINTS_PATH).map_err(|e| {
            DomainError::InvalidInput(format!("Invalid integrations API url: {}", e))
        })
    }

    fn endpoint_url(&self, id: &IntegrationId) -> Result<Url, DomainError> {
        if id.is_empty() {
            return Err(DomainError::InvalidInput(
                "Integration id cannot be empty".to_string(),
            ));
        }

        let mut url = self.endpoints_url()?;
        url.path_segments_mut()
            .map_err(|_| {
                DomainError::InvalidInput("Integrations API url cannot be a base".to_string())
            })?
            .push(id.as_str());
        Ok(url)
    }

    /// Send a request, retrying transient failures. A 404 yields `Ok(None)`.
    async fn send(
        &self,
        operation: &str,
        method: Method,
        url: Url,
        body: Option<&ServerIntegrationRequest>,
    ) -> Result<Option<Response>, DomainError> {
        debug!("{} {} {}", operation, method, url);

        self.http
            .execute_with_retry(operation, || {
                let mut request = self.http.client().request(method.clone(), url.clone());
                if let Some(token) = &self.auth_token {
                    request = request.bearer_auth(token);
                }
                if let Some(body) = body {
                    request = request.json(body);
                }

                async move {
                    let response = request.send().await?;
                    if response.status() == StatusCode::NOT_FOUND {
                        return Ok::<_, anyhow::Error>(None);
                    }
                    Ok(Some(response.error_for_status()?))
                }
            })
            .await
            .map_err(|e| map_http_error(operation, e))
    }
}

fn map_http_error(operation: &str, error: anyhow::Error) -> DomainError {
    if let Some(err) = error.downcast_ref::<reqwest::Error>() {
        if err.is_timeout() {
            return DomainError::Timeout(format!("{} failed: {}", operation, err));
        }
        if err.is_connect() {
            return DomainError::Network(format!("{} failed: {}", operation, err));
        }

        if let Some(status) = err.status() {
            if is_retryable_status(status) {
                return DomainError::ExternalService(format!(
                    "{} failed with status {}",
                    operation, status
                ));
            }
            return DomainError::Infrastructure(format!(
                "{} rejected with status {}",
                operation, status
            ));
        }
    }

    DomainError::Infrastructure(format!("{} failed: {}", operation, error))
}

async fn read_body(operation: &str, response: Response) -> Result<String, DomainError> {
    response.text().await.map_err(|e| {
        DomainError::Network(format!("{}: failed to read response body: {}", operation, e))
    })
}

fn parse_body<T: serde::de::DeserializeOwned>(operation: &str, body: &str) -> Result<T, DomainError> {
    serde_json::from_str(body).map_err(|e| {
        DomainError::Deserialization(format!("{}: invalid response body: {}", operation, e))
    })
}

#[async_trait]
impl IntegrationRepository for HttpIntegrationRepository {
    async fn find_all(&self) -> Result<Vec<Integration>, DomainError> {
        const OP: &str = "List integrations";

        let response = self
            .send(OP, Method::GET, self.endpoints_url()?, None)
            .await?
            .ok_or_else(|| {
                DomainError::Infrastructure(format!("{}: endpoints resource not found", OP))
            })?;

        let body = read_body(OP, response).await?;
        let records: Option<Vec<ServerIntegration>> = parse_body(OP, &body)?;
        to_integrations(records)
    }

    async fn find_by_id(&self, id: &IntegrationId) -> Result<Option<Integration>, DomainError> {
        const OP: &str = "Get integration";

        let Some(response) = self
            .send(OP, Method::GET, self.endpoint_url(id)?, None)
            .await?
        else {
            debug!("Integration {} not found", id);
            return Ok(None);
        };

        let body = read_body(OP, response).await?;
        let record: ServerIntegration = parse_body(OP, &body)?;
        to_integration(record).map(Some)
    }

    async fn create(&self, integration: &NewIntegration) -> Result<Integration, DomainError> {
        const OP: &str = "Create integration";

        let request = to_server_integration_request(integration);
        let response = self
            .send(OP, Method::POST, self.endpoints_url()?, Some(&request))
            .await?
            .ok_or_else(|| {
                DomainError::Infrastructure(format!("{}: endpoints resource not found", OP))
            })?;

        let body = read_body(OP, response).await?;
        let created = to_integration(parse_body(OP, &body)?)?;

        info!("Integration created: {} ({})", created.id(), created.name);
        Ok(created)
    }

    async fn update(&self, integration: &Integration) -> Result<Integration, DomainError> {
        const OP: &str = "Update integration";

        let request = to_server_integration_request(integration);
        let response = self
            .send(OP, Method::PUT, self.endpoint_url(integration.id())?, Some(&request))
            .await?
            .ok_or_else(|| DomainError::NotFound(integration.id().to_string()))?;

        // The service may answer an update with an empty body
        let body = read_body(OP, response).await?;
        let updated = if body.trim().is_empty() {
            integration.clone()
        } else {
            to_integration(parse_body(OP, &body)?)?
        };

        info!("Integration updated: {}", updated.id());
        Ok(updated)
    }

    async fn delete(&self, id: &IntegrationId) -> Result<(), DomainError> {
        const OP: &str = "Delete integration";

        self.send(OP, Method::DELETE, self.endpoint_url(id)?, None)
            .await?
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;

        info!("Integration deleted: {}", id);
        Ok(())
    }
}
