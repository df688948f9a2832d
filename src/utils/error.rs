//! Custom error types for certwatch
//!
//! This module defines domain-specific error types using `thiserror` for
//! the failure modes of a single watchdog pass: configuration, certificate
//! inspection and webhook delivery.

use thiserror::Error;

/// Exit status for configuration errors
pub const EXIT_CONFIG: i32 = 2;

/// Exit status for any other fatal error
pub const EXIT_FAILURE: i32 = 1;

/// Top-level error type for certwatch
#[derive(Error, Debug)]
pub enum CertWatchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),
}

impl CertWatchError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CertWatchError::Config(_) => EXIT_CONFIG,
            CertWatchError::Notify(_) => EXIT_FAILURE,
        }
    }
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },
}

/// Certificate inspection errors, all recoverable per host
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Invalid target URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Connection to {host} failed: {message}")]
    Connection { host: String, message: String },

    #[error("No certificate in the chain of {host} matches {domain}")]
    CertNotFound { host: String, domain: String },
}

/// Webhook delivery errors
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Failed to build webhook client: {message}")]
    ClientBuild { message: String },

    #[error("Webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Webhook returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Result type alias using CertWatchError
pub type Result<T> = std::result::Result<T, CertWatchError>;
