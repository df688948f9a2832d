//! certwatch library
//!
//! A one-shot TLS certificate expiry watchdog:
//! - TLS handshake with verification disabled to read any peer chain
//! - SAN matching against the host's registrable domain
//! - Remaining validity in whole days
//! - Webhook alert when a threshold is crossed
//!
//! # Usage
//!
//! ```rust,ignore
//! use certwatch::config::{RunConfig, Settings};
//! use certwatch::runner;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = RunConfig::new(vec!["example.com".into()], "key", 10, Settings::default())
//!         .unwrap();
//!     let summary = runner::run_once(&config).await.unwrap();
//!     println!("{} alert(s) sent", summary.alerts_sent());
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod notify;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{RunConfig, Settings};
pub use models::{AlertMessage, CertificateRecord};
pub use runner::{Runner, RunSummary};
pub use utils::{CertWatchError, Result};
