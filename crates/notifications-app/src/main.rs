use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};

use notifications_app::application::queries::IntegrationQueryService;
use notifications_app::presentation::CommandError;
use notifications_domain::integration::IntegrationRepository;
use notifications_infrastructure::config::{log_dir_from_lookup, IntegrationsConfig};
use notifications_infrastructure::integrations::HttpIntegrationRepository;
use notifications_infrastructure::logging::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_dir = log_dir_from_lookup(|key| std::env::var(key).ok());
    init_logger(&log_dir).context("Failed to initialize logging")?;

    let config = IntegrationsConfig::from_env().context("Invalid configuration")?;
    info!(base_url = %config.base_url, "Loading integrations");

    let repo: Arc<dyn IntegrationRepository> = Arc::new(HttpIntegrationRepository::new(&config)?);
    let queries = IntegrationQueryService::new(repo);

    let integrations = queries.list().await.map_err(|e| {
        let err = CommandError::from(e);
        error!(code = err.code, recoverable = err.recoverable, "{}", err.message);
        err
    })?;

    info!(count = integrations.len(), "Integrations loaded");
    println!("{}", serde_json::to_string_pretty(&integrations)?);

    Ok(())
}
