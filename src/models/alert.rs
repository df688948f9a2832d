//! Alert text rendered for a certificate record

use crate::config::Messages;
use crate::models::CertificateRecord;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage(String);

impl AlertMessage {
    /// Render `template` with the record's domain and days and the threshold
    pub fn render(template: &str, record: &CertificateRecord, threshold_days: i64) -> Self {
        let mut vars = HashMap::new();
        vars.insert("domain", record.matched_domain.clone());
        vars.insert("days", record.remaining_days.to_string());
        vars.insert("threshold", threshold_days.to_string());
        Self(Messages::format(template, &vars))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlertMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::messages::DEFAULT_ALERT_TEMPLATE;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_default_template() {
        let record = CertificateRecord {
            matched_domain: "*.example.com".to_string(),
            remaining_days: 5,
            not_after: Utc.with_ymd_and_hms(2030, 1, 6, 0, 0, 0).unwrap(),
            chain_index: 0,
        };
        let alert = AlertMessage::render(DEFAULT_ALERT_TEMPLATE, &record, 30);
        assert_eq!(
            alert.as_str(),
            "证书:*.example.com 剩余:5天过期, 请准备好更新工作 (当前告警阈值:30天)"
        );
    }

    #[test]
    fn test_san_with_placeholder_text_is_rendered_verbatim() {
        let record = CertificateRecord {
            matched_domain: "{threshold}{days}.example.com".to_string(),
            remaining_days: 5,
            not_after: Utc.with_ymd_and_hms(2030, 1, 6, 0, 0, 0).unwrap(),
            chain_index: 0,
        };
        let alert = AlertMessage::render("{domain} {days}/{threshold}", &record, 30);
        assert_eq!(alert.as_str(), "{threshold}{days}.example.com 5/30");
    }
}
