use certwatch::checks::{matching_domain, parse_target, select_certificate};
use chrono::{TimeZone, Utc};
use rcgen::{date_time_ymd, CertificateParams, KeyPair};

fn cert_der(sans: &[&str], expires: (i32, u8, u8)) -> Vec<u8> {
    let sans: Vec<String> = sans.iter().map(|s| s.to_string()).collect();
    let mut params = CertificateParams::new(sans).unwrap();
    params.not_before = date_time_ymd(2020, 1, 1);
    params.not_after = date_time_ymd(expires.0, expires.1, expires.2);
    let key = KeyPair::generate().unwrap();
    params.self_signed(&key).unwrap().der().to_vec()
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
}

#[test]
fn test_single_matching_certificate() {
    let chain = vec![
        cert_der(&["www.example.com"], (2030, 1, 6)),
        cert_der(&[], (2035, 1, 1)),
    ];

    let record = select_certificate(&chain, "example.com", now()).unwrap();
    assert_eq!(record.matched_domain, "www.example.com");
    assert_eq!(record.remaining_days, 5);
    assert_eq!(record.chain_index, 0);
}

#[test]
fn test_days_truncate_toward_zero() {
    let chain = vec![cert_der(&["example.com"], (2030, 1, 6))];
    let an_hour_later = now() + chrono::Duration::hours(1);

    let record = select_certificate(&chain, "example.com", an_hour_later).unwrap();
    assert_eq!(record.remaining_days, 4);
}

#[test]
fn test_last_matching_san_within_certificate_wins() {
    let chain = vec![cert_der(
        &["www.example.com", "other.org", "api.example.com"],
        (2030, 1, 6),
    )];

    let record = select_certificate(&chain, "example.com", now()).unwrap();
    assert_eq!(record.matched_domain, "api.example.com");
}

#[test]
fn test_last_matching_certificate_in_chain_wins() {
    let chain = vec![
        cert_der(&["www.example.com"], (2030, 1, 6)),
        cert_der(&["example.com"], (2030, 3, 1)),
        cert_der(&["unrelated.org"], (2031, 1, 1)),
    ];

    let record = select_certificate(&chain, "example.com", now()).unwrap();
    assert_eq!(record.matched_domain, "example.com");
    assert_eq!(record.chain_index, 1);
    assert_eq!(record.remaining_days, 59);
}

#[test]
fn test_no_matching_certificate() {
    let chain = vec![
        cert_der(&["other.org"], (2030, 1, 6)),
        cert_der(&[], (2035, 1, 1)),
    ];

    assert!(select_certificate(&chain, "example.com", now()).is_none());
}

#[test]
fn test_empty_chain() {
    assert!(select_certificate(&[], "example.com", now()).is_none());
}

#[test]
fn test_matching_is_case_sensitive_substring() {
    let upper = vec![cert_der(&["WWW.EXAMPLE.COM"], (2030, 1, 6))];
    assert!(select_certificate(&upper, "example.com", now()).is_none());

    let lookalike = vec![cert_der(&["notexample.com"], (2030, 1, 6))];
    let record = select_certificate(&lookalike, "example.com", now()).unwrap();
    assert_eq!(record.matched_domain, "notexample.com");
}

#[test]
fn test_wildcard_san_matches_by_containment() {
    let chain = vec![cert_der(&["*.example.com"], (2030, 1, 6))];

    let record = select_certificate(&chain, "example.com", now()).unwrap();
    assert_eq!(record.matched_domain, "*.example.com");
}

#[test]
fn test_expired_certificate_has_negative_days() {
    let chain = vec![cert_der(&["example.com"], (2029, 12, 29))];

    let record = select_certificate(&chain, "example.com", now()).unwrap();
    assert_eq!(record.remaining_days, -3);
    assert!(record.is_expired());
}

#[test]
fn test_unparseable_entries_are_skipped() {
    let chain = vec![
        cert_der(&["example.com"], (2030, 1, 6)),
        b"garbage".to_vec(),
    ];

    let record = select_certificate(&chain, "example.com", now()).unwrap();
    assert_eq!(record.chain_index, 0);
}

#[test]
fn test_upper_case_host_does_not_match_lower_case_san() {
    let chain = vec![cert_der(&["www.example.com"], (2030, 1, 6))];
    let (host, _) = parse_target("https://WWW.Example.COM", 443).unwrap();
    let domain = matching_domain(&host);

    assert_eq!(domain, "Example.COM");
    assert!(select_certificate(&chain, &domain, now()).is_none());
}
