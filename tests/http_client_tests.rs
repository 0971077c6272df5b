mod support;

use mobile_signon::domain::ports::{AuthProvider, UserGateway};
use mobile_signon::infrastructure::config::AppConfig;
use mobile_signon::infrastructure::http::HttpApiClient;
use std::time::Duration;
use support::{valid_sign_in, valid_sign_up};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> HttpApiClient {
    let config = AppConfig {
        api_base_url: server.uri(),
        request_timeout: Duration::from_secs(5),
    };
    HttpApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_create_user_posts_the_form_record_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(serde_json::json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "secret123",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.create_user(&valid_sign_up()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_user_treats_any_2xx_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(client.create_user(&valid_sign_up()).await.is_ok());
}

#[tokio::test]
async fn test_create_user_fails_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.create_user(&valid_sign_up()).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_create_user_fails_when_the_server_is_unreachable() {
    let config = AppConfig {
        // Nothing listens here.
        api_base_url: "http://127.0.0.1:9".to_string(),
        request_timeout: Duration::from_secs(1),
    };
    let client = HttpApiClient::new(&config).unwrap();

    let result = client.create_user(&valid_sign_up()).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_sign_in_posts_credentials_to_sessions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(body_json(serde_json::json!({
            "email": "alice@example.com",
            "password": "secret123",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(client.sign_in(&valid_sign_in()).await.is_ok());
}

#[tokio::test]
async fn test_sign_in_fails_on_rejected_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.sign_in(&valid_sign_in()).await;

    assert!(result.is_err());
}
