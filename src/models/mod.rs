//! Data models for certwatch

pub mod alert;
pub mod certificate;

pub use alert::AlertMessage;
pub use certificate::{remaining_days, CertificateRecord};
