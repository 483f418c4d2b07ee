/// Integration tests: HttpIntegrationRepository against a mock integrations service
///
/// Covers:
/// 1. Listing decodes every record in order
/// 2. One unsupported record fails the whole listing
/// 3. Missing integrations read as None / NotFound
/// 4. Create and update send the adapter request body
/// 5. Transient failures are retried
/// 6. Slow responses surface as timeouts
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use notifications_domain::integration::{
    HttpMethod, IntegrationHttp, IntegrationId, IntegrationRepository, NewIntegration,
};
use notifications_domain::shared::DomainError;
use notifications_infrastructure::config::{IntegrationsConfig, RetryConfig};
use std::time::Duration;
use notifications_infrastructure::integrations::HttpIntegrationRepository;

const BASE_PATH: &str = "/api/integrations/v1.0";

fn fast_retry() -> RetryConfig {
    RetryConfig {
        max_retries: 2,
        initial_backoff_ms: 5,
        max_backoff_ms: 10,
        backoff_multiplier: 2.0,
    }
}

fn repository(server: &MockServer) -> HttpIntegrationRepository {
    let config = IntegrationsConfig::new(&format!("{}{}", server.uri(), BASE_PATH))
        .unwrap()
        .with_retry(fast_retry());
    HttpIntegrationRepository::new(&config).unwrap()
}

fn webhook_json(id: &str, name: &str, enabled: bool, url: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "enabled": enabled,
        "description": "dragons be here",
        "type": "webhook",
        "properties": {
            "url": url,
            "method": "GET",
            "disable_ssl_verification": false,
            "secret_token": ""
        }
    })
}

#[tokio::test]
async fn list_integrations_preserves_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE_PATH}/endpoints")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            webhook_json("foobar", "my name is", false, "https://my-cool-webhook.com"),
            webhook_json("meep", "abc", true, "https://foobarbaz.com"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let integrations = repository(&server).find_all().await.unwrap();

    assert_eq!(integrations.len(), 2);
    assert_eq!(integrations[0].id().as_str(), "foobar");
    assert!(!integrations[0].is_enabled);
    assert_eq!(integrations[1].id().as_str(), "meep");
    assert_eq!(
        integrations[1].webhook().unwrap().url,
        "https://foobarbaz.com"
    );
}

#[tokio::test]
async fn list_integrations_fails_on_unsupported_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE_PATH}/endpoints")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            webhook_json("foobar", "my name is", false, "https://my-cool-webhook.com"),
            { "id": "mail", "name": "mail", "enabled": true, "type": "email", "properties": {} },
        ])))
        .mount(&server)
        .await;

    let result = repository(&server).find_all().await;

    assert!(matches!(result, Err(DomainError::UnsupportedVariant(_))));
}

#[tokio::test]
async fn list_integrations_fails_on_null_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE_PATH}/endpoints")))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    assert!(repository(&server).find_all().await.is_err());
}

#[tokio::test]
async fn get_missing_integration_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE_PATH}/endpoints/unknown")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = repository(&server)
        .find_by_id(&IntegrationId::from_string("unknown"))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn get_integration_decodes_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE_PATH}/endpoints/meep")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(webhook_json("meep", "abc", true, "https://foobarbaz.com")),
        )
        .mount(&server)
        .await;

    let integration = repository(&server)
        .find_by_id(&IntegrationId::from_string("meep"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(integration.name, "abc");
    assert!(integration.is_enabled);
}

#[tokio::test]
async fn create_integration_posts_request_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{BASE_PATH}/endpoints")))
        .and(header("authorization", "Bearer secret"))
        .and(body_json(json!({
            "name": "meep",
            "enabled": true,
            "type": "webhook",
            "description": "",
            "properties": {
                "url": "https://myurl.com",
                "method": "POST",
                "disable_ssl_verification": false,
                "secret_token": "foobar"
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(webhook_json("new-id", "meep", true, "https://myurl.com")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = IntegrationsConfig::new(&format!("{}{}", server.uri(), BASE_PATH))
        .unwrap()
        .with_retry(fast_retry())
        .with_auth_token("secret");
    let repo = HttpIntegrationRepository::new(&config).unwrap();

    let new_integration = NewIntegration::new_webhook(
        "meep",
        IntegrationHttp::new("https://myurl.com")
            .with_method(HttpMethod::Post)
            .with_secret_token("foobar"),
    );

    let created = repo.create(&new_integration).await.unwrap();

    assert_eq!(created.id().as_str(), "new-id");
    assert_eq!(created.name, "meep");
}

#[tokio::test]
async fn update_with_empty_body_returns_sent_integration() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("{BASE_PATH}/endpoints/meep")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let integration = NewIntegration::new_webhook("abc", IntegrationHttp::new("https://a.example"))
        .with_id(IntegrationId::from_string("meep"));

    let updated = repository(&server).update(&integration).await.unwrap();

    assert_eq!(updated, integration);
}

#[tokio::test]
async fn update_missing_integration_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("{BASE_PATH}/endpoints/gone")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let integration = NewIntegration::new_webhook("abc", IntegrationHttp::new("https://a.example"))
        .with_id(IntegrationId::from_string("gone"));

    let result = repository(&server).update(&integration).await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn delete_integration() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{BASE_PATH}/endpoints/meep")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    repository(&server)
        .delete(&IntegrationId::from_string("meep"))
        .await
        .unwrap();
}

#[tokio::test]
async fn transient_failure_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE_PATH}/endpoints")))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE_PATH}/endpoints")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let integrations = repository(&server).find_all().await.unwrap();

    assert!(integrations.is_empty());
}

#[tokio::test]
async fn client_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE_PATH}/endpoints")))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let result = repository(&server).find_all().await;

    assert!(matches!(result, Err(DomainError::Infrastructure(_))));
}

#[tokio::test]
async fn persistent_server_error_surfaces_as_external_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE_PATH}/endpoints")))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let result = repository(&server).find_all().await;

    let err = result.unwrap_err();
    assert!(matches!(err, DomainError::ExternalService(_)));
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn slow_response_surfaces_as_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE_PATH}/endpoints")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut config = IntegrationsConfig::new(&format!("{}{}", server.uri(), BASE_PATH))
        .unwrap()
        .with_retry(RetryConfig::disabled());
    config.timeouts.http_request = Duration::from_millis(200);
    let repo = HttpIntegrationRepository::new(&config).unwrap();

    let err = repo.find_all().await.unwrap_err();

    assert!(matches!(err, DomainError::Timeout(_)));
    assert!(err.is_recoverable());
}
