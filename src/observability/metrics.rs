use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry};
use tracing::info;
use std::sync::Arc;
use tokio::sync::OnceCell;

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE.get_or_init(|| async {
        info!("Initializing Metrics ...");
        Metrics::new()}
    ).await
}

// Operation labels
pub const OP_EXCHANGE: &str = "exchange";
pub const OP_REFRESH: &str = "refresh";

// Failure reason labels
pub const REASON_DECODE: &str = "decode";
pub const REASON_VALIDATION: &str = "validation";
pub const REASON_SCOPE: &str = "scope";
pub const REASON_PROVIDER: &str = "provider";

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Token request metrics
    pub token_requests: IntCounterVec,
    pub token_failures: IntCounterVec,
    pub token_request_duration: HistogramVec,

    // Runtime
    pub up: IntGauge,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("tokenexchange".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            token_requests: IntCounterVec::new(Opts::new("token_requests_total","Token requests by operation",),&["operation"],).unwrap(),
            token_failures: IntCounterVec::new(Opts::new("token_failures_total", "Token request failures by reason"),&["operation", "reason"],).unwrap(),
            token_request_duration: HistogramVec::new(HistogramOpts::new("token_request_duration_seconds", "Token request duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),&["operation"],).unwrap(),

            up: IntGauge::new("up", "1 if service is healthy").unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.token_requests.clone())).unwrap();
        reg.register(Box::new(metrics.token_failures.clone())).unwrap();
        reg.register(Box::new(metrics.token_request_duration.clone())).unwrap();
        reg.register(Box::new(metrics.up.clone())).unwrap();

        metrics
    }
}
