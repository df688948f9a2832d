//! Application settings configuration
//!
//! Defines inspection transport settings, the webhook endpoint and message
//! templates. Every key is optional in the TOML file.

use super::messages::Messages;
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default webhook endpoint (WeCom group robot)
pub const DEFAULT_WEBHOOK_ENDPOINT: &str = "https://qyapi.weixin.qq.com/cgi-bin/webhook/send";

/// Certificate inspection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InspectSettings {
    /// Upper bound for TCP connect plus TLS handshake
    pub timeout_secs: u64,
    /// Port used when the address has none
    pub default_port: u16,
}

impl Default for InspectSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            default_port: 443,
        }
    }
}

impl InspectSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Webhook delivery settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebhookSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WEBHOOK_ENDPOINT.to_string(),
            timeout_secs: 30,
        }
    }
}

impl WebhookSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub inspect: InspectSettings,
    #[serde(default)]
    pub webhook: WebhookSettings,
    #[serde(default)]
    pub messages: Messages,
}

impl Settings {
    /// Load settings from the default config file, falling back to built-in defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.inspect.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "inspect.timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.webhook.endpoint.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "webhook.endpoint".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.inspect.timeout(), Duration::from_secs(30));
        assert_eq!(settings.inspect.default_port, 443);
        assert_eq!(settings.webhook.endpoint, DEFAULT_WEBHOOK_ENDPOINT);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml_str("[inspect]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(settings.inspect.timeout_secs, 5);
        assert_eq!(settings.inspect.default_port, 443);
        assert_eq!(settings.webhook.timeout_secs, 30);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Settings::from_toml_str("[inspect]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
