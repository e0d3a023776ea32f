use anyhow::{anyhow, Result};

/// ================================
/// Process-wide service settings
/// ================================
///
/// Read once from the environment at startup and never mutated afterwards;
/// shared with the handlers and the provider client as a read-only value.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    /// Scope applied when a request carries no explicit scopes.
    pub default_scope: Option<String>,
    /// Base URL of the identity provider; the tenant token endpoint lives
    /// under `{authority}/{tenant_id}/oauth2/v2.0/token`.
    pub authority: String,
    pub http_timeout_ms: u64,
    pub server: ServerConfig,
    pub metrics: MetricsConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct MetricsConfig {
    pub path: String,
    pub is_enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { path: "/metrics".to_string(), is_enabled: false }
    }
}

impl ServiceConfig {
    /// Validate startup invariants, aggregating every issue before failing.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        if self.client_id.trim().is_empty() {
            errors.push("config: CLIENT_ID must not be empty".to_string());
        }
        if self.client_secret.trim().is_empty() {
            errors.push("config: CLIENT_SECRET must not be empty".to_string());
        }
        if self.tenant_id.trim().is_empty() {
            errors.push("config: TENANT_ID must not be empty".to_string());
        }
        if let Some(scope) = &self.default_scope {
            if scope.trim().is_empty() {
                errors.push("config: DEFAULT_SCOPE if set must not be empty".to_string());
            }
        }
        if !self.authority.starts_with("http://") && !self.authority.starts_with("https://") {
            errors.push(format!(
                "config: AUTHORITY '{}' must be an http(s) URL",
                self.authority
            ));
        }
        if self.http_timeout_ms == 0 {
            errors.push("config: HTTP_TIMEOUT_MS must be > 0".to_string());
        }
        if self.server.host.is_empty() {
            errors.push("config: server host must be valid".to_string());
        }
        if !self.metrics.path.starts_with('/') {
            errors.push(format!(
                "config: metrics path '{}' must start with '/'",
                self.metrics.path
            ));
        }
        if let Some(logging) = &self.logging {
            let valid = ["trace", "debug", "info", "warn", "error"];
            if !valid.contains(&logging.level.as_str()) {
                errors.push(format!(
                    "config: log level '{}' invalid; allowed: {:?}",
                    logging.level, valid
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!(
                "config is not valid, total errors:{}, \n{}",
                errors.len(),
                errors.join("\n")
            ))
        }
    }

    /// Client secret safe for startup logging: first characters + ellipsis.
    pub fn masked_secret(&self) -> String {
        mask(&self.client_secret)
    }
}

fn mask(value: &str) -> String {
    if value.chars().count() <= 4 {
        "****".to_string()
    } else {
        let head: String = value.chars().take(4).collect();
        format!("{}...", head)
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{DEFAULT_AUTHORITY, DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_PORT};

    fn base_config() -> ServiceConfig {
        ServiceConfig {
            client_id: "client-abc".to_string(),
            client_secret: "super-secret-value".to_string(),
            tenant_id: "tenant-123".to_string(),
            default_scope: None,
            authority: DEFAULT_AUTHORITY.to_string(),
            http_timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
            server: ServerConfig { host: "0.0.0.0".to_string(), port: DEFAULT_PORT },
            metrics: MetricsConfig::default(),
            logging: None,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn empty_credentials_are_rejected_together() {
        let mut cfg = base_config();
        cfg.client_id = "".to_string();
        cfg.client_secret = " ".to_string();

        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("CLIENT_ID"));
        assert!(err.contains("CLIENT_SECRET"));
        assert!(err.contains("total errors:2"));
    }

    #[test]
    fn authority_must_be_http_url() {
        let mut cfg = base_config();
        cfg.authority = "login.microsoftonline.com".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn blank_default_scope_is_rejected() {
        let mut cfg = base_config();
        cfg.default_scope = Some("  ".to_string());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn masked_secret_keeps_prefix_only() {
        let cfg = base_config();
        assert_eq!(cfg.masked_secret(), "supe...");
    }

    #[test]
    fn short_secret_is_fully_masked() {
        let mut cfg = base_config();
        cfg.client_secret = "abc".to_string();
        assert_eq!(cfg.masked_secret(), "****");
    }
}
