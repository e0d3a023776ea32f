// tests/common/mod.rs
pub use axum::Router;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;
use std::sync::Arc;
use reqwest::Client;

use crate::config::settings::{MetricsConfig, ServerConfig, ServiceConfig};
use crate::provider::client::ProviderClient;
use crate::server::server::{router, AppState};

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

/// Service configuration pointing the provider client at `authority`
/// (a mock server base URL in tests).
pub fn test_config(authority: &str) -> ServiceConfig {
    ServiceConfig {
        client_id: "client-under-test".to_string(),
        client_secret: "secret-under-test".to_string(),
        tenant_id: "tenant-under-test".to_string(),
        default_scope: None,
        authority: authority.to_string(),
        http_timeout_ms: 5000,
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        metrics: MetricsConfig::default(),
        logging: None,
    }
}

/// Token endpoint path the provider client derives from [`test_config`].
pub const TEST_TOKEN_PATH: &str = "/tenant-under-test/oauth2/v2.0/token";

/// Spawn the full application wired against the configured authority.
pub async fn spawn_app(config: ServiceConfig) -> (JoinHandle<()>, SocketAddr) {
    let config = Arc::new(config);
    let provider = ProviderClient::new(&config).expect("provider client");
    let state = AppState::new(config, Arc::new(provider));
    spawn_axum(router(state)).await
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}
