//! Certificate inspection result

use chrono::{DateTime, Utc};

/// The certificate selected from a host's chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRecord {
    /// SAN entry that matched the host's registrable domain
    pub matched_domain: String,
    /// Whole days until expiry, truncated toward zero (negative once expired)
    pub remaining_days: i64,
    /// Expiry time of the selected certificate
    pub not_after: DateTime<Utc>,
    /// Position of the selected certificate in the peer chain
    pub chain_index: usize,
}

impl CertificateRecord {
    /// Whether this record crosses the alert threshold (strictly fewer days)
    pub fn should_alert(&self, threshold_days: i64) -> bool {
        self.remaining_days < threshold_days
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_days < 0
    }
}

/// Whole days from `now` until `not_after`, truncated toward zero
pub fn remaining_days(not_after: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    not_after.signed_duration_since(now).num_days()
}
