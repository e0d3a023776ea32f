use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tokio::time::Instant;
use tracing::{error, info};

use crate::exchange::error::ApiError;
use crate::exchange::models::{ExchangeRequest, RefreshRequest};
use crate::exchange::scope::resolve_scope;
use crate::observability::metrics::{
    get_metrics, Metrics, OP_EXCHANGE, OP_REFRESH, REASON_DECODE, REASON_PROVIDER, REASON_SCOPE,
    REASON_VALIDATION,
};
use crate::provider::client::TokenGrant;
use crate::server::server::AppState;

/// Exchange a caller-supplied assertion for a downstream access token.
///
/// Stages run in fixed order and short-circuit on failure:
/// decode -> required field -> scope resolution -> provider call.
pub async fn exchange_token<P>(
    State(state): State<AppState<P>>,
    payload: Result<Json<ExchangeRequest>, JsonRejection>,
) -> Response
where
    P: TokenGrant + Send + Sync + 'static,
{
    let metrics = get_metrics().await;
    let start = Instant::now();
    metrics.token_requests.with_label_values(&[OP_EXCHANGE]).inc();

    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(e) => {
            error!("Failed to decode request body: {}", e);
            let err = ApiError::invalid_request(&format!("Failed to decode request body: {}", e));
            return fail(metrics, OP_EXCHANGE, REASON_DECODE, start, err);
        }
    };

    if req.assertion.is_empty() {
        error!("assertion is missing from request");
        let err = ApiError::invalid_request("assertion is required");
        return fail(metrics, OP_EXCHANGE, REASON_VALIDATION, start, err);
    }

    let scope = match resolve_scope(&req.scopes, state.config.default_scope.as_deref()) {
        Ok(scope) => scope,
        Err(e) => {
            error!("scopes are missing from request and no default scope is set");
            return fail(metrics, OP_EXCHANGE, REASON_SCOPE, start, e);
        }
    };

    info!("Attempting token exchange for scopes: {}", scope);

    match state.provider.exchange(&req.assertion, &scope).await {
        Ok(token) => {
            info!("Successfully acquired token for downstream API");
            observe(metrics, OP_EXCHANGE, start);
            (StatusCode::OK, Json(token)).into_response()
        }
        Err(e) => {
            error!("Failed to exchange token: {}", e);
            fail(metrics, OP_EXCHANGE, REASON_PROVIDER, start, ApiError::exchange_failed(&e.to_string()))
        }
    }
}

/// Exchange a refresh token for a new access token.
pub async fn refresh_token<P>(
    State(state): State<AppState<P>>,
    payload: Result<Json<RefreshRequest>, JsonRejection>,
) -> Response
where
    P: TokenGrant + Send + Sync + 'static,
{
    let metrics = get_metrics().await;
    let start = Instant::now();
    metrics.token_requests.with_label_values(&[OP_REFRESH]).inc();

    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(e) => {
            error!("Failed to decode request body: {}", e);
            let err = ApiError::invalid_request(&format!("Failed to decode request body: {}", e));
            return fail(metrics, OP_REFRESH, REASON_DECODE, start, err);
        }
    };

    if req.refresh_token.is_empty() {
        error!("refreshToken is missing from request");
        let err = ApiError::invalid_request("refreshToken is required");
        return fail(metrics, OP_REFRESH, REASON_VALIDATION, start, err);
    }

    let scope = match resolve_scope(&req.scopes, state.config.default_scope.as_deref()) {
        Ok(scope) => scope,
        Err(e) => {
            error!("scopes are missing from request and no default scope is set");
            return fail(metrics, OP_REFRESH, REASON_SCOPE, start, e);
        }
    };

    info!("Attempting token refresh for scopes: {}", scope);

    match state.provider.refresh(&req.refresh_token, &scope).await {
        Ok(token) => {
            info!("Successfully refreshed token for downstream API");
            observe(metrics, OP_REFRESH, start);
            (StatusCode::OK, Json(token)).into_response()
        }
        Err(e) => {
            error!("Failed to refresh token: {}", e);
            fail(metrics, OP_REFRESH, REASON_PROVIDER, start, ApiError::refresh_failed(&e.to_string()))
        }
    }
}

fn observe(metrics: &Metrics, operation: &str, start: Instant) {
    metrics
        .token_request_duration
        .with_label_values(&[operation])
        .observe(start.elapsed().as_secs_f64());
}

fn fail(metrics: &Metrics, operation: &str, reason: &str, start: Instant, err: ApiError) -> Response {
    metrics.token_failures.with_label_values(&[operation, reason]).inc();
    observe(metrics, operation, start);
    err.into_response()
}
