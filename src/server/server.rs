use std::sync::Arc;
use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use crate::config::settings::ServiceConfig;
use crate::exchange::handlers::{exchange_token, refresh_token};
use crate::observability::metrics::get_metrics;
use crate::observability::routes as metrics_routes;
use crate::provider::client::{ProviderClient, TokenGrant};
use crate::server::docs;

/// Read-only state shared by every handler invocation.
pub struct AppState<P = ProviderClient> {
    pub config: Arc<ServiceConfig>,
    pub provider: Arc<P>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            provider: self.provider.clone(),
        }
    }
}

impl<P> AppState<P> {
    pub fn new(config: Arc<ServiceConfig>, provider: Arc<P>) -> Self {
        Self { config, provider }
    }
}

/// Assemble the public router: token operations, documentation, metrics.
pub fn router<P>(state: AppState<P>) -> Router
where
    P: TokenGrant + Send + Sync + 'static,
{
    let metrics_router = metrics_routes::router(&state.config.metrics);

    Router::new()
        .route(
            "/",
            post(exchange_token::<P>)
                .get(docs::index)
                .fallback(docs::method_not_allowed),
        )
        .route(
            "/refresh",
            post(refresh_token::<P>).fallback(docs::method_not_allowed),
        )
        .route(
            "/swagger.json",
            get(docs::swagger_json).fallback(docs::method_not_allowed),
        )
        .route(
            "/swagger.yaml",
            get(docs::swagger_yaml).fallback(docs::method_not_allowed),
        )
        .merge(metrics_router)
        .fallback(docs::unknown_path)
        .with_state(state)
}

/// Start the Axum server with the provider client built from config.
pub async fn start(service_config: Arc<ServiceConfig>) -> Result<()> {
    let provider = ProviderClient::new(&service_config)?;
    let state = AppState::new(service_config.clone(), Arc::new(provider));
    let app = router(state);

    let bind_addr = format!(
        "{}:{}",
        service_config.server.host, service_config.server.port
    );
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Token Exchange Service listening on {}", bind_addr);
    get_metrics().await.up.set(1);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
