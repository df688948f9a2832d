//! Watchdog pass
//!
//! Checks every configured host in order, logs each outcome and posts an
//! alert for certificates under the threshold. Per-host failures never stop
//! the pass.

use crate::checks::CertificateInspector;
use crate::config::RunConfig;
use crate::models::{AlertMessage, CertificateRecord};
use crate::notify::{Notifier, WebhookNotifier};
use crate::utils::NotifyError;
use tracing::{info, warn};

/// What happened to one host
#[derive(Debug)]
pub enum HostOutcome {
    /// Certificate found, above the threshold
    Healthy {
        host: String,
        record: CertificateRecord,
    },
    /// Certificate under the threshold and the alert was delivered
    Alerted {
        host: String,
        record: CertificateRecord,
    },
    /// Certificate under the threshold but delivery failed
    AlertFailed {
        host: String,
        record: CertificateRecord,
        error: String,
    },
    /// Connection or certificate lookup failed; host skipped
    Failed { host: String, error: String },
}

impl HostOutcome {
    pub fn host(&self) -> &str {
        match self {
            HostOutcome::Healthy { host, .. }
            | HostOutcome::Alerted { host, .. }
            | HostOutcome::AlertFailed { host, .. }
            | HostOutcome::Failed { host, .. } => host,
        }
    }

    pub fn record(&self) -> Option<&CertificateRecord> {
        match self {
            HostOutcome::Healthy { record, .. }
            | HostOutcome::Alerted { record, .. }
            | HostOutcome::AlertFailed { record, .. } => Some(record),
            HostOutcome::Failed { .. } => None,
        }
    }
}

/// Outcomes of a full pass, in host order
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<HostOutcome>,
}

impl RunSummary {
    pub fn checked(&self) -> usize {
        self.outcomes.iter().filter(|o| o.record().is_some()).count()
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, HostOutcome::Failed { .. }))
    }

    pub fn alerts_sent(&self) -> usize {
        self.count(|o| matches!(o, HostOutcome::Alerted { .. }))
    }

    pub fn alerts_failed(&self) -> usize {
        self.count(|o| matches!(o, HostOutcome::AlertFailed { .. }))
    }

    fn count(&self, pred: impl Fn(&HostOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Sequential runner over a validated config
pub struct Runner<'a, N> {
    config: &'a RunConfig,
    inspector: CertificateInspector,
    notifier: N,
}

impl<'a, N: Notifier> Runner<'a, N> {
    pub fn new(config: &'a RunConfig, notifier: N) -> Self {
        Self {
            config,
            inspector: CertificateInspector::new(&config.settings.inspect),
            notifier,
        }
    }

    /// Check every host once, in order
    pub async fn run(&self) -> RunSummary {
        let mut summary = RunSummary::default();

        for host in &self.config.hosts {
            summary.outcomes.push(self.check_host(host).await);
        }

        info!(
            "Checked {} host(s): {} ok, {} failed, {} alert(s) sent, {} alert(s) failed",
            self.config.hosts.len(),
            summary.checked(),
            summary.failed(),
            summary.alerts_sent(),
            summary.alerts_failed()
        );

        summary
    }

    /// Inspect one host and alert if it is under the threshold
    pub async fn check_host(&self, host: &str) -> HostOutcome {
        let target = target_url(host);

        let record = match self.inspector.inspect(&target).await {
            Ok(record) => record,
            Err(e) => {
                warn!("{}", e);
                return HostOutcome::Failed {
                    host: host.to_string(),
                    error: e.to_string(),
                };
            }
        };

        let threshold = self.config.threshold_days;
        let message =
            AlertMessage::render(&self.config.settings.messages.alert, &record, threshold);
        info!("{}", message);
        if record.is_expired() {
            warn!(
                "Certificate {} expired {} day(s) ago",
                record.matched_domain,
                record.remaining_days.abs()
            );
        }

        if !record.should_alert(threshold) {
            return HostOutcome::Healthy {
                host: host.to_string(),
                record,
            };
        }

        match self.notifier.notify(message.as_str()).await {
            Ok(()) => {
                info!("Alert sent for {}", record.matched_domain);
                HostOutcome::Alerted {
                    host: host.to_string(),
                    record,
                }
            }
            Err(e) => {
                warn!("Alert for {} failed: {}", record.matched_domain, e);
                HostOutcome::AlertFailed {
                    host: host.to_string(),
                    record,
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Run one pass with the webhook notifier built from `config`
pub async fn run_once(config: &RunConfig) -> Result<RunSummary, NotifyError> {
    let notifier = WebhookNotifier::new(&config.settings.webhook, config.token.clone())?;
    Ok(Runner::new(config, notifier).run().await)
}

/// Prefix `https://` unless the address already carries it
pub fn target_url(host: &str) -> String {
    if host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_url() {
        assert_eq!(target_url("example.com"), "https://example.com");
        assert_eq!(target_url("example.com:8443"), "https://example.com:8443");
        assert_eq!(target_url("https://example.com"), "https://example.com");
    }
}
