use serde::{Deserialize, Serialize};

/// Expected JSON body for the token exchange request.
///
/// Fields default to empty on decode so the required-field validation owns
/// the error message instead of the JSON decoder.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRequest {
    #[serde(default)]
    pub assertion: String,
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// Expected JSON body for the token refresh request.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshRequest {
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: String,
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// Token response returned by the provider's token endpoint and relayed
/// to the caller as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub scope: String,
}
