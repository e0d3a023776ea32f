use axum::routing::get;
use axum::{response::IntoResponse, Router};
use axum::http::{header::CONTENT_TYPE, StatusCode};
use prometheus::{Encoder, TextEncoder};

use crate::config::settings::MetricsConfig;
use crate::observability::metrics::get_metrics;

/// Router for the prometheus scrape endpoint; empty when metrics are off.
pub fn router<S>(metrics_config: &MetricsConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let mut router = Router::new();
    if metrics_config.is_enabled {
        router = router.route(metrics_config.path.as_str(), get(serve_metrics));
    }
    router
}

async fn serve_metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = get_metrics().await.registry.gather();
    let mut buffer = Vec::new();

    encoder
        .encode(&metric_families, &mut buffer)
        .expect("Failed to encode metrics");

    let response = String::from_utf8(buffer).expect("Failed to convert bytes to string");
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/plain; version=0.0.4")],
        response,
    )
}
