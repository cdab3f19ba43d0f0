//! Configuration module for the HRBoard backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

/// Number of records requested from the upstream feed per session.
pub const EMPLOYEE_LIMIT: usize = 20;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream demo user feed
    pub upstream_url: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Optional fixed seed for the enrichment RNG (reproducible data sets)
    pub enrich_seed: Option<u64>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let upstream_url = env::var("HR_UPSTREAM_URL")
            .unwrap_or_else(|_| "https://dummyjson.com".to_string());

        let bind_addr = env::var("HR_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid HR_BIND_ADDR format");

        let enrich_seed = env::var("HR_ENRICH_SEED")
            .ok()
            .and_then(|s| s.parse().ok());

        let log_level = env::var("HR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            upstream_url,
            bind_addr,
            enrich_seed,
            log_level,
        }
    }
}
