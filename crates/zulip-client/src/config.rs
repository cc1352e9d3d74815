// ABOUTME: Configuration loading and validation for the Zulip client.
// ABOUTME: Supports TOML config files with environment variable expansion.

use crate::error::{ClientError, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Top-level configuration structure for zulip-cli.
#[derive(Debug, Clone, Deserialize)]
pub struct ZulipConfig {
    pub api: ApiConfig,
}

/// Credentials and server address for the Zulip REST API.
#[derive(Clone, Deserialize)]
pub struct ApiConfig {
    /// Account email the API key belongs to.
    pub email: String,
    /// API key from the Zulip account settings page.
    pub key: String,
    /// Server URL (e.g., "https://chat.example.com").
    pub site: String,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("email", &self.email)
            .field("key", &"[REDACTED]")
            .field("site", &self.site)
            .finish()
    }
}

impl ZulipConfig {
    /// Load configuration from the specified path or default location.
    ///
    /// Default location: `~/.config/zulip-cli/config.toml`
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = path
            .or_else(|| dirs::config_dir().map(|d| d.join("zulip-cli").join("config.toml")))
            .ok_or_else(|| ClientError::Config("Could not determine config path".into()))?;

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            ClientError::Config(format!("Failed to read config from {:?}: {}", path, e))
        })?;

        Self::parse(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn parse(contents: &str) -> Result<Self> {
        // Expand environment variables, warning on undefined vars.
        let contents = shellexpand::env_with_context_no_errors(contents, |var: &str| {
            match std::env::var(var) {
                Ok(val) => Some(val),
                Err(_) => {
                    warn!(
                        variable = %var,
                        "Environment variable not defined, using empty string"
                    );
                    Some(String::new())
                }
            }
        });

        let config: ZulipConfig = toml::from_str(&contents)
            .map_err(|e| ClientError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate that required fields are present and properly formatted.
    fn validate(&self) -> Result<()> {
        if self.api.email.is_empty() {
            return Err(ClientError::Config("api.email is required".into()));
        }
        if !self.api.email.contains('@') {
            return Err(ClientError::Config(
                "api.email must be an email address".into(),
            ));
        }
        if self.api.key.is_empty() {
            return Err(ClientError::Config("api.key is required".into()));
        }
        if self.api.site.is_empty() {
            return Err(ClientError::Config("api.site is required".into()));
        }
        Ok(())
    }
}
