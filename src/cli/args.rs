//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Required flags are `Option`s so that a missing value reaches config
/// validation instead of clap's own usage error.
#[derive(Parser, Debug, Clone)]
#[command(name = "certwatch")]
#[command(version)]
#[command(about = "Check TLS certificate expiry for a list of hosts and alert via webhook", long_about = None)]
pub struct Cli {
    /// Hosts to check, separated by ','
    #[arg(long, value_name = "HOSTS")]
    pub addresses: Option<String>,

    /// Webhook robot key
    #[arg(long, value_name = "TOKEN")]
    pub wxtoken: Option<String>,

    /// Alert when fewer than this many days remain
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub day: i64,

    /// Settings file (defaults to config/default.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
