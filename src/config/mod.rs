//! Configuration module for certwatch
//!
//! Loads TOML settings and validates command-line input into an immutable
//! [`RunConfig`] that is built once at startup and handed to the runner.

pub mod messages;
pub mod settings;

pub use messages::Messages;
pub use settings::{InspectSettings, Settings, WebhookSettings};

use crate::cli::Cli;
use crate::utils::ConfigError;

/// Validated configuration for a single watchdog pass
#[derive(Clone)]
pub struct RunConfig {
    pub hosts: Vec<String>,
    pub token: String,
    pub threshold_days: i64,
    pub settings: Settings,
}

impl RunConfig {
    /// Build a config, rejecting an empty host list or token
    pub fn new(
        hosts: Vec<String>,
        token: impl Into<String>,
        threshold_days: i64,
        settings: Settings,
    ) -> Result<Self, ConfigError> {
        if hosts.is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "addresses".to_string(),
            });
        }

        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "wxtoken".to_string(),
            });
        }

        Ok(Self {
            hosts,
            token,
            threshold_days,
            settings,
        })
    }

    /// Validate parsed arguments and load the settings file they point at
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let hosts = cli
            .addresses
            .as_deref()
            .map(parse_addresses)
            .unwrap_or_default();
        if hosts.is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "addresses".to_string(),
            });
        }

        let token = cli.wxtoken.clone().unwrap_or_default();
        if token.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "wxtoken".to_string(),
            });
        }

        let settings = match &cli.config {
            Some(path) => Settings::load_from_file(path)?,
            None => Settings::load_default()?,
        };

        Self::new(hosts, token, cli.day, settings)
    }
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("hosts", &self.hosts)
            .field("token", &"<redacted>")
            .field("threshold_days", &self.threshold_days)
            .field("settings", &self.settings)
            .finish()
    }
}

/// Split a comma-separated address list, trimming blanks and dropping empty entries
pub fn parse_addresses(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|addr| !addr.is_empty())
        .map(String::from)
        .collect()
}
