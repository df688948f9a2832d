//! Certificate inspection
//!
//! Fetches a host's peer chain and picks the certificate whose DNS SANs
//! contain the host's registrable domain.

use super::domain::matching_domain;
use super::tls::ChainFetcher;
use crate::config::InspectSettings;
use crate::models::{remaining_days, CertificateRecord};
use crate::utils::InspectError;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::Url;
use tracing::debug;
use x509_parser::prelude::*;

/// Inspects the certificate chain served by a target URL
pub struct CertificateInspector {
    fetcher: ChainFetcher,
    default_port: u16,
}

impl CertificateInspector {
    pub fn new(settings: &InspectSettings) -> Self {
        Self {
            fetcher: ChainFetcher::new(settings.timeout()),
            default_port: settings.default_port,
        }
    }

    /// Inspect `target` (`https://host[:port][/...]`) and return the matching record
    pub async fn inspect(&self, target: &str) -> Result<CertificateRecord, InspectError> {
        let (host, port) = parse_target(target, self.default_port)?;
        let domain = matching_domain(&host);

        let chain = self.fetcher.fetch(&host, port).await?;
        debug!("{} presented {} certificate(s)", host, chain.len());

        select_certificate(&chain, &domain, Utc::now())
            .ok_or(InspectError::CertNotFound { host, domain })
    }
}

/// Extract host and port from a target URL
pub fn parse_target(target: &str, default_port: u16) -> Result<(String, u16), InspectError> {
    let url = Url::parse(target).map_err(|e| InspectError::InvalidUrl {
        url: target.to_string(),
        message: e.to_string(),
    })?;

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| InspectError::InvalidUrl {
            url: target.to_string(),
            message: "no host".to_string(),
        })?;
    // IPv6 literals come back bracketed
    let host = host.trim_start_matches('[').trim_end_matches(']');

    // URL parsing lowercases domains; SAN matching is case-sensitive on the host as written
    let host = match raw_host(target) {
        Some(raw) if raw.eq_ignore_ascii_case(host) => raw.to_string(),
        _ => host.to_string(),
    };

    Ok((host, url.port().unwrap_or(default_port)))
}

/// Host exactly as written in `target`, without scheme, userinfo, port or path
fn raw_host(target: &str) -> Option<&str> {
    let (_, rest) = target.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let authority = authority.rsplit_once('@').map_or(authority, |(_, a)| a);

    if let Some(v6) = authority.strip_prefix('[') {
        return v6.split_once(']').map(|(h, _)| h);
    }
    Some(authority.split_once(':').map_or(authority, |(h, _)| h))
}

/// Select the certificate to report from a DER chain.
///
/// Every certificate is visited in order. A certificate matches when one of
/// its DNS SANs contains `domain` as a substring; the last matching SAN of
/// the last matching certificate wins. Unparseable certificates are skipped.
pub fn select_certificate(
    chain: &[Vec<u8>],
    domain: &str,
    now: DateTime<Utc>,
) -> Option<CertificateRecord> {
    let mut selected = None;

    for (index, der) in chain.iter().enumerate() {
        let cert = match X509Certificate::from_der(der) {
            Ok((_, cert)) => cert,
            Err(e) => {
                debug!("Skipping unparseable certificate at position {}: {}", index, e);
                continue;
            }
        };

        let dns_names = extract_dns_names(&cert);
        let Some(matched) = dns_names.iter().rev().find(|name| name.contains(domain)) else {
            continue;
        };

        let Some(not_after) = asn1_time_to_datetime(cert.validity().not_after) else {
            debug!("Skipping certificate at position {} with invalid expiry", index);
            continue;
        };

        selected = Some(CertificateRecord {
            matched_domain: matched.clone(),
            remaining_days: remaining_days(not_after, now),
            not_after,
            chain_index: index,
        });
    }

    selected
}

fn extract_dns_names(cert: &X509Certificate) -> Vec<String> {
    let mut names = Vec::new();

    if let Ok(Some(san_ext)) = cert.subject_alternative_name() {
        for name in &san_ext.value.general_names {
            if let GeneralName::DNSName(dns) = name {
                names.push(dns.to_string());
            }
        }
    }

    names
}

fn asn1_time_to_datetime(time: ASN1Time) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(time.timestamp(), 0).single()
}
