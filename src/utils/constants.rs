//! Shared constants and invariants

pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

// OAuth2 grant parameters
pub const GRANT_TYPE_JWT_BEARER: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
pub const GRANT_TYPE_REFRESH_TOKEN: &str = "refresh_token";
pub const REQUESTED_TOKEN_USE_OBO: &str = "on_behalf_of";
