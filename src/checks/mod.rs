//! Check modules for certwatch
//!
//! Certificate inspection and the pieces it is built from.

pub mod certificate;
pub mod domain;
pub mod tls;

pub use certificate::{parse_target, select_certificate, CertificateInspector};
pub use domain::matching_domain;
pub use tls::ChainFetcher;
