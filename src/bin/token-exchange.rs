use clap::Parser;
use std::sync::Arc;
use anyhow::Result;
use tracing::info;

use token_exchange::config::settings::{
    LogFormat, LoggingConfig, MetricsConfig, ServerConfig, ServiceConfig,
};
use token_exchange::server;
use token_exchange::utils::constants::{
    DEFAULT_AUTHORITY, DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_PORT,
};
use token_exchange::utils::logging;
use token_exchange::utils::logging::LogLevel;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, env = "CLIENT_ID")]
    client_id: String,
    #[arg(long, env = "CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,
    #[arg(long, env = "TENANT_ID")]
    tenant_id: String,
    #[arg(long, env = "DEFAULT_SCOPE")]
    default_scope: Option<String>,
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
    #[arg(long, env = "AUTHORITY", default_value = DEFAULT_AUTHORITY)]
    authority: String,
    #[arg(long, env = "HTTP_TIMEOUT_MS", default_value_t = DEFAULT_HTTP_TIMEOUT_MS)]
    http_timeout_ms: u64,
    #[arg(long, env = "METRICS_ENABLED")]
    metrics_enabled: bool,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Read environment
    // -------------------------------

    let args = Args::parse();

    let service_config = ServiceConfig {
        client_id: args.client_id,
        client_secret: args.client_secret,
        tenant_id: args.tenant_id,
        default_scope: args.default_scope,
        authority: args.authority,
        http_timeout_ms: args.http_timeout_ms,
        server: ServerConfig {
            host: "0.0.0.0".to_string(),
            port: args.port,
        },
        metrics: MetricsConfig {
            is_enabled: args.metrics_enabled,
            ..MetricsConfig::default()
        },
        logging: args
            .log_level
            .map(|level| LoggingConfig::new(level.as_str().to_lowercase(), LogFormat::from_env())),
    };
    service_config.validate()?;

    // -------------------------------
    // 2. Init logging
    // -------------------------------

    logging::run(&service_config, args.log_level)?;

    info!(
        "Loaded configuration: client_id={}, client_secret={}, tenant_id={}",
        service_config.client_id,
        service_config.masked_secret(),
        service_config.tenant_id
    );

    // -------------------------------
    // 3. Start http server
    // -------------------------------

    server::server::start(Arc::new(service_config)).await
}
