// partner-client/tests/client_integration.rs

use partner_client::{ClientConfig, HttpClient};

#[tokio::test]
async fn test_config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, partner_client::config::DEFAULT_BASE_URL);
    assert_eq!(config.timeout, 30);
    assert!(config.token.is_none());
}

#[tokio::test]
async fn test_config_builder() {
    let config = ClientConfig::new("http://localhost:8080")
        .with_token("t0k3n")
        .with_timeout(5);

    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.token.as_deref(), Some("t0k3n"));
    assert_eq!(config.timeout, 5);
}

#[tokio::test]
async fn test_client_creation() {
    let client = HttpClient::new(&ClientConfig::new("http://localhost:8080")).unwrap();
    assert!(client.token().is_none());

    let client = client.with_token("t0k3n");
    assert_eq!(client.token(), Some("t0k3n"));
}
