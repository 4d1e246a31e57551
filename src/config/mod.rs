//! Configuration loading and management

use crate::core::auth::{AuthProvider, NoAuthProvider, StaticTokenProvider};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "category_api=info,tower_http=info";

/// Complete service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

/// Listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Bearer token authentication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// When false, every request is accepted as anonymous
    pub enabled: bool,

    /// Accepted bearer tokens
    pub tokens: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tokens: Vec::new(),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply `CATEGORY_API_*` environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// Values that fail to parse are ignored and the current setting is kept.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup("CATEGORY_API_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("CATEGORY_API_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }

        if let Some(enabled) = lookup("CATEGORY_API_AUTH_ENABLED") {
            if let Ok(enabled) = enabled.trim().to_ascii_lowercase().parse() {
                self.auth.enabled = enabled;
            }
        }

        if let Some(tokens) = lookup("CATEGORY_API_TOKENS") {
            self.auth.tokens = tokens
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(filter) = lookup("CATEGORY_API_LOG") {
            self.logging.filter = filter;
        }

        self
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the auth provider matching this configuration
    pub fn auth_provider(&self) -> Result<Arc<dyn AuthProvider>> {
        if !self.auth.enabled {
            return Ok(Arc::new(NoAuthProvider));
        }

        let provider = StaticTokenProvider::new(self.auth.tokens.iter().cloned());
        if provider.is_empty() {
            bail!(
                "auth is enabled but no tokens are configured \
                 (set auth.tokens or CATEGORY_API_TOKENS)"
            );
        }

        Ok(Arc::new(provider))
    }
}
