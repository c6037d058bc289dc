//! Process Configuration
//!
//! Command-line flags with environment fallbacks. Read once at startup.

use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "numbers-aggregator", version, about = "Merges integer lists from many HTTP sources")]
pub struct Config {
    /// HTTP listen address.
    #[arg(long, env = "NUMBERS_HTTP_ADDR", default_value = "0.0.0.0:8080")]
    pub http_addr: SocketAddr,

    /// Per-request deadline in milliseconds.
    #[arg(long, env = "NUMBERS_TIMEOUT_MS", default_value_t = 500, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: u64,

    /// Connect timeout for source requests in milliseconds.
    #[arg(long, env = "NUMBERS_CONNECT_TIMEOUT_MS", default_value_t = 250, value_parser = clap::value_parser!(u64).range(1..))]
    pub connect_timeout_ms: u64,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}
