//! Utility modules for certwatch
//!
//! This module contains the error types shared across the crate.

pub mod error;

pub use error::{
    CertWatchError, ConfigError, InspectError, NotifyError, Result, EXIT_CONFIG, EXIT_FAILURE,
};
