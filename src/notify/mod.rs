//! Alert delivery
//!
//! The runner only sees the [`Notifier`] trait; [`WebhookNotifier`] is the
//! one production sink.

pub mod webhook;

pub use webhook::{TextContent, WebhookNotifier, WebhookPayload};

use crate::utils::NotifyError;
use async_trait::async_trait;

/// A sink for alert text
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `message` once. No retries.
    async fn notify(&self, message: &str) -> Result<(), NotifyError>;
}
