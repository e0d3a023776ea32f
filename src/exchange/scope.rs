use tracing::info;

use crate::exchange::error::ApiError;

/// Resolve the effective scope string for a token request.
///
/// Explicit scopes win and are joined with single spaces in the order given;
/// otherwise the configured default scope applies. A request with neither is
/// rejected before anything reaches the provider.
pub fn resolve_scope(scopes: &[String], default_scope: Option<&str>) -> Result<String, ApiError> {
    if !scopes.is_empty() {
        return Ok(scopes.join(" "));
    }

    match default_scope {
        Some(scope) => {
            info!("No scopes provided, using default scope: {}", scope);
            Ok(scope.to_string())
        }
        None => Err(ApiError::invalid_request(
            "scopes are required in the request body when a default scope is not configured",
        )),
    }
}
