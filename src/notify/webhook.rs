//! Group-robot webhook notifier (WeCom text message format)
//!
//! Posts `{"msgtype":"text","text":{"content":...}}` to the configured
//! endpoint with the robot key as the `key` query parameter.

use super::Notifier;
use crate::config::WebhookSettings;
use crate::utils::NotifyError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Text message payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub msgtype: String,
    pub text: TextContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

impl WebhookPayload {
    pub fn text(content: &str) -> Self {
        Self {
            msgtype: "text".to_string(),
            text: TextContent {
                content: content.to_string(),
            },
        }
    }
}

/// Delivers alerts to a webhook endpoint.
///
/// Uses its own client with normal certificate verification.
pub struct WebhookNotifier {
    client: Client,
    endpoint: String,
    key: String,
}

impl WebhookNotifier {
    pub fn new(settings: &WebhookSettings, key: impl Into<String>) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(format!("certwatch/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NotifyError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            key: key.into(),
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let payload = WebhookPayload::text(message);
        debug!("Posting alert to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.key.as_str())])
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        info!("Webhook response: {}", body);
        Ok(())
    }
}
