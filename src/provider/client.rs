/// Provider client module
///
/// Performs the actual OAuth2 token acquisition against the identity
/// provider's token endpoint for the configured tenant.

use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use crate::config::settings::ServiceConfig;
use crate::exchange::models::TokenResponse;
use crate::utils::constants::{
    GRANT_TYPE_JWT_BEARER, GRANT_TYPE_REFRESH_TOKEN, REQUESTED_TOKEN_USE_OBO,
};

/// Capability of acquiring downstream tokens for a caller-supplied grant.
///
/// The provider call is the only network seam of the service; handlers are
/// generic over this trait so they can run against a double in tests.
pub trait TokenGrant {
    fn exchange(
        &self,
        assertion: &str,
        scope: &str,
    ) -> impl std::future::Future<Output = Result<TokenResponse>> + Send;

    fn refresh(
        &self,
        refresh_token: &str,
        scope: &str,
    ) -> impl std::future::Future<Output = Result<TokenResponse>> + Send;
}

#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl ProviderClient {
    pub fn new(cfg: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(cfg.http_timeout_ms))
            .build()
            .map_err(|e| anyhow!("failed to create request client: {}", e))?;

        Ok(Self {
            client,
            token_url: format!(
                "{}/{}/oauth2/v2.0/token",
                cfg.authority.trim_end_matches('/'),
                cfg.tenant_id
            ),
            client_id: cfg.client_id.clone(),
            client_secret: cfg.client_secret.clone(),
        })
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// One POST to the token endpoint, form-url-encoded, no retries.
    async fn submit(&self, form: HashMap<&str, &str>) -> Result<TokenResponse> {
        debug!("requesting token from {}", self.token_url);

        let response = self
            .client
            .post(&self.token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| anyhow!("failed to send request: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| anyhow!("failed to read response: {}", e))?;

        if status != StatusCode::OK {
            // The provider's own error JSON passes through verbatim.
            return Err(anyhow!("request to token endpoint failed: {}", body));
        }

        serde_json::from_str(&body).map_err(|e| anyhow!("failed to parse response: {}", e))
    }
}

impl TokenGrant for ProviderClient {
    async fn exchange(&self, assertion: &str, scope: &str) -> Result<TokenResponse> {
        let mut form = HashMap::new();
        form.insert("grant_type", GRANT_TYPE_JWT_BEARER);
        form.insert("client_id", self.client_id.as_str());
        form.insert("client_secret", self.client_secret.as_str());
        form.insert("assertion", assertion);
        form.insert("scope", scope);
        form.insert("requested_token_use", REQUESTED_TOKEN_USE_OBO);
        self.submit(form).await
    }

    async fn refresh(&self, refresh_token: &str, scope: &str) -> Result<TokenResponse> {
        let mut form = HashMap::new();
        form.insert("grant_type", GRANT_TYPE_REFRESH_TOKEN);
        form.insert("client_id", self.client_id.as_str());
        form.insert("client_secret", self.client_secret.as_str());
        form.insert("refresh_token", refresh_token);
        form.insert("scope", scope);
        self.submit(form).await
    }
}
